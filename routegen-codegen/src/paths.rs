//! Path constants for generated files.
//!
//! This module centralizes the directory layout of a generated go-zero
//! project, plus the names used to look up handler templates.

/// Handler files directory relative to project root.
pub const HANDLER_DIR: &str = "internal/handler";

/// Logic package directory relative to project root.
pub const LOGIC_DIR: &str = "internal/logic";

/// Service context package directory relative to project root.
pub const CONTEXT_DIR: &str = "internal/svc";

/// Request/response types package directory relative to project root.
pub const TYPES_DIR: &str = "internal/types";

/// File extension for Go source files.
pub const FILE_EXTENSION: &str = "go";

/// Annotation key that selects the output folder of a group or route.
pub const GROUP_PROPERTY: &str = "group";

/// Module path of the go-zero framework.
pub const PROJECT_OPEN_SOURCE_URL: &str = "github.com/tal-tech/go-zero";

/// Template category for API generators (`<home>/api/...`).
pub const TEMPLATE_CATEGORY: &str = "api";

/// Override template file for handlers.
pub const HANDLER_TEMPLATE_FILE: &str = "handler.tpl";

/// Name given to the handler template in error messages.
pub const HANDLER_TEMPLATE_NAME: &str = "handlerTemplate";
