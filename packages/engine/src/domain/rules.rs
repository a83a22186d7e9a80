//! Fixed rule constants for the three-seat game.

pub const SEATS: usize = 3;
pub const DECK_SIZE: usize = 32;

/// Cards per hand once the declarer has discarded the talon.
pub const HAND_SIZE: usize = 10;
pub const TALON_SIZE: usize = 2;
pub const TRICKS_PER_HAND: usize = 10;

/// Cards the forhont holds before the talon discard.
pub const DEAL_FORHONT: usize = 12;

pub const POINTS_ACE_TEN: u16 = 10;
pub const POINTS_ULTIMO: u16 = 10;
pub const ANNOUNCEMENT_PLAIN: u16 = 20;
pub const ANNOUNCEMENT_TRUMP: u16 = 40;

/// Flek, Re, Tutti, Boty, Kalhoty.
pub const MAX_FLEK_LEVEL: u8 = 5;
