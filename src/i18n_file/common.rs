// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// Per-file message statistics shared by all subcommands.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq)]
pub struct MessageStats {
    /// Number of translatable entries found in the file, translated or not.
    pub total: u64,
    /// Number of entries whose translation is still empty.
    ///
    /// Always bounded by `total`: every missing entry is counted as an entry
    /// first.
    pub missing: u64,
}

impl MessageStats {
    /// The "Translated" value shown in statistics output.
    pub fn translated(&self) -> u64 {
        self.total - self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }

    /// Integer completion percentage, truncated toward zero.
    ///
    /// `None` when the file holds no entries at all; callers must reject that
    /// case rather than invent a percentage for it.
    pub fn completion_percentage(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        Some((100.0 - (self.missing as f64 / self.total as f64) * 100.0) as u8)
    }
}

impl std::ops::AddAssign<&Self> for MessageStats {
    fn add_assign(&mut self, rhs: &Self) {
        self.total += rhs.total;
        self.missing += rhs.missing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_completion_percentage() {
        let stats = MessageStats { total: 4, missing: 1 };
        assert_eq!(stats.completion_percentage(), Some(75));
        assert_eq!(stats.translated(), 3);
        assert!(!stats.is_complete());

        // Truncation, not rounding: 100 - 100/3 = 66.66... -> 66.
        let stats = MessageStats { total: 3, missing: 1 };
        assert_eq!(stats.completion_percentage(), Some(66));

        let stats = MessageStats { total: 10, missing: 0 };
        assert_eq!(stats.completion_percentage(), Some(100));
        assert!(stats.is_complete());

        let stats = MessageStats { total: 5, missing: 5 };
        assert_eq!(stats.completion_percentage(), Some(0));
    }

    #[test]
    fn tst_completion_percentage_no_entries() {
        assert_eq!(MessageStats::default().completion_percentage(), None);
    }

    #[test]
    fn tst_add_assign() {
        let mut totals = MessageStats::default();
        totals += &MessageStats { total: 4, missing: 1 };
        totals += &MessageStats { total: 6, missing: 0 };
        assert_eq!(totals, MessageStats { total: 10, missing: 1 });
    }
}
