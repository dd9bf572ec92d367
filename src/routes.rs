// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const DEVLOGS: &str = "/api/devlogs";
pub const DEVLOGS_SEARCH: &str = "/api/devlogs/search";
pub const SERVICES: &str = "/api/services";
