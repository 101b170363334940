use indexmap::IndexMap;
use serde::Deserialize;

/// Root of an API spec file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSpec {
    /// Descriptive metadata
    #[serde(default)]
    pub info: Info,

    /// The service whose routes are generated
    pub service: Service,
}

impl ApiSpec {
    /// Iterate over every route together with its enclosing group, in
    /// declaration order.
    pub fn routes(&self) -> impl Iterator<Item = (&Group, &Route)> {
        self.service
            .groups
            .iter()
            .flat_map(|group| group.routes.iter().map(move |route| (group, route)))
    }

    /// Total number of routes across all groups.
    pub fn route_count(&self) -> usize {
        self.service.groups.iter().map(|g| g.routes.len()).sum()
    }
}

/// Descriptive metadata about the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub name: String,

    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A set of routes sharing annotations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    #[serde(default)]
    pub annotation: Annotation,

    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotation.insert(key, value);
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Look up an annotation value by key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotation.get(key)
    }
}

/// A single HTTP endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    /// HTTP method (e.g. "get", "post")
    #[serde(default)]
    pub method: String,

    /// URL path (e.g. "/users/:id")
    #[serde(default)]
    pub path: String,

    /// Raw handler label, as written by the author
    pub handler: String,

    /// Request type name
    pub request: Option<String>,

    /// Response type name
    pub response: Option<String>,

    #[serde(default)]
    pub annotation: Annotation,
}

impl Route {
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = method.into();
        self.path = path.into();
        self
    }

    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.request = Some(request.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotation.insert(key, value);
        self
    }

    /// Request type name, or `""` when the route takes no request body.
    pub fn request_type_name(&self) -> &str {
        self.request.as_deref().unwrap_or_default()
    }

    /// Response type name, or `""` when the route returns no payload.
    pub fn response_type_name(&self) -> &str {
        self.response.as_deref().unwrap_or_default()
    }

    /// Look up an annotation value by key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotation.get(key)
    }
}

/// Ordered string key/value annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Annotation(IndexMap<String, String>);

impl Annotation {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
