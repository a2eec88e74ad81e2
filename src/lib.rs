//! # routetext
//!
//! Turn-by-turn instruction text for OSRM routes.
//!
//! Given a route step from an OSRM v5 response, the formatter selects a
//! localized instruction template and interpolates its `{token}` placeholders
//! (way name, destination signage, exit number, and so on) into a sentence a
//! rider can follow. Language tables ship as JSON; English is bundled.
//!
//! The token vocabulary lives in [osrm::token], the placeholder scanner in
//! [osrm::template], and the step compiler in [osrm::formatter].

pub mod osrm;
