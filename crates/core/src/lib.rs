pub mod config;
pub mod render;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, PathsConfig, RenderConfig, TicketsConfig,
};
pub use render::{QrRenderer, RenderError, RenderJob, RenderSummary};
pub use ticket::{
    read_batch, verify_batch, write_batch, BatchIssue, BatchReport, IdGenerator, Ticket,
    TicketError, TicketGenerator, TicketStatus, UuidIdGenerator,
};
