//! Domain records produced by the reader.

/// One in-range temperature, tagged with its 1-based hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    pub hour: usize,
    pub value: i32,
}

/// An out-of-range token: skipped, but reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based position among all integer tokens read.
    pub ordinal: usize,
    /// 1-based source line the token was found on.
    pub line: usize,
    pub value: i32,
}

/// Where the integer stream stopped because a token did not parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Halt {
    pub line: usize,
    pub token: String,
}

/// Everything a read pass produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Valid readings in input order.
    pub readings: Vec<Reading>,
    /// Out-of-range tokens in input order.
    pub rejected: Vec<Rejected>,
    /// Integer tokens consumed, valid or not.
    pub tokens: usize,
    pub halted: Option<Halt>,
}

impl ReadReport {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Plain values of the valid readings, in order.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.readings.iter().map(|r| r.value)
    }

    pub(crate) fn accept(&mut self, value: i32) {
        let hour = self.readings.len() + 1;
        self.readings.push(Reading { hour, value });
    }
}
