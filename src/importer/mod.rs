//! CSV-to-service import pipeline
//!
//! `reader` yields rows lazily, `defaults` fills `auto` cells, `api` talks to
//! the league service and `orchestrator` sequences the three import phases.

pub mod api;
pub mod defaults;
pub mod mappings;
pub mod models;
pub mod orchestrator;
pub mod reader;

pub use api::ServiceClient;
pub use mappings::{LoginTeamMap, TeamIdMap};
pub use models::{PlayerRecord, SessionToken, TeamId};
pub use orchestrator::{Importer, TeamPhase};
