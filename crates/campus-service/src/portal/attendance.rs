use serde::Serialize;

use crate::catalog::model::{Attendance, AttendanceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub excused: usize,
    /// Present records as a rounded whole percentage of all records.
    pub percentage: u32,
}

/// Tallies attendance records by status.
#[must_use]
pub fn summarize(records: &[Attendance]) -> AttendanceSummary {
    let count = |status: AttendanceStatus| records.iter().filter(|r| r.status == status).count();

    let total = records.len();
    let present = count(AttendanceStatus::Present);
    AttendanceSummary {
        total,
        present,
        late: count(AttendanceStatus::Late),
        absent: count(AttendanceStatus::Absent),
        excused: count(AttendanceStatus::Excused),
        percentage: rounded_percentage(present, total),
    }
}

/// `part / whole` as a whole percentage, rounded half up. Zero when `whole` is zero.
#[must_use]
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = part.saturating_mul(200).saturating_add(whole) / whole.saturating_mul(2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::attendance;

    #[test]
    fn demo_records() {
        let summary = summarize(&attendance());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.present, 2);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.absent, 0);
        assert_eq!(summary.percentage, 67);
    }

    #[test]
    fn empty_records() {
        assert_eq!(summarize(&[]), AttendanceSummary::default());
    }

    #[test]
    fn rounding() {
        assert_eq!(rounded_percentage(1, 2), 50);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(3, 3), 100);
    }
}
