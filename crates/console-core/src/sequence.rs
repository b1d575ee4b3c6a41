//! Request Sequencing
//!
//! Each region of the page (the form, the results table) hands out increasing
//! tokens. Only the response holding the latest token may touch its region.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Form,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    region: Region,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    form: Cell<u64>,
    results: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, region: Region) -> &Cell<u64> {
        match region {
            Region::Form => &self.form,
            Region::Results => &self.results,
        }
    }

    /// Take a fresh token, invalidating every earlier one for the region
    pub fn begin(&self, region: Region) -> RequestToken {
        let counter = self.counter(region);
        let seq = counter.get() + 1;
        counter.set(seq);
        RequestToken { region, seq }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.counter(token.region).get() == token.seq
    }
}
