//! Shared constants for integration tests
//!
//! When the sample catalog changes, update only this file and fixtures.rs.

#![allow(dead_code)]

/// "Für Elise", Beethoven, beginner, 3.5 minutes
pub const FUR_ELISE_ID: &str = "1";

/// "Moonlight Sonata", Beethoven, advanced, most downloaded
pub const MOONLIGHT_SONATA_ID: &str = "2";

/// "Eine Kleine Nachtmusik", Mozart, MIDI only
pub const NACHTMUSIK_ID: &str = "3";

pub const BEETHOVEN: &str = "Ludwig van Beethoven";
pub const MOZART: &str = "Wolfgang Amadeus Mozart";
