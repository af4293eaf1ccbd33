//! Check-in recording: at most one record per `(date, kind)` slot.

use chrono::NaiveDate;

use spendquest_domain::{CheckIn, CheckInKind};

use crate::{store::PersistenceGateway, time::Clock, CoreError};

pub struct CheckInService;

impl CheckInService {
    /// Inserts or replaces the check-in for its `(date, kind)` slot. After
    /// this returns, exactly one record exists for that slot.
    pub fn upsert(
        gateway: &PersistenceGateway,
        check_in: CheckIn,
    ) -> Result<Vec<CheckIn>, CoreError> {
        let mut check_ins = gateway.load_check_ins();
        match check_ins
            .iter_mut()
            .find(|c| c.date == check_in.date && c.kind == check_in.kind)
        {
            Some(slot) => *slot = check_in,
            None => check_ins.push(check_in),
        }
        gateway.save_check_ins(&check_ins)?;
        Ok(check_ins)
    }

    pub fn find_on(
        check_ins: &[CheckIn],
        date: NaiveDate,
        kind: CheckInKind,
    ) -> Option<&CheckIn> {
        check_ins.iter().find(|c| c.date == date && c.kind == kind)
    }

    /// The check-in recorded today for the given slot, if any.
    pub fn find_today(
        gateway: &PersistenceGateway,
        clock: &dyn Clock,
        kind: CheckInKind,
    ) -> Option<CheckIn> {
        let today = clock.today();
        gateway
            .load_check_ins()
            .into_iter()
            .find(|c| c.date == today && c.kind == kind)
    }
}
