use crate::api::{LeaveRequest, RequestStatus};

/// Which list a view works on: the signed-in user's own requests or, for HR,
/// everyone's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    Mine,
    All,
}

impl RequestScope {
    /// Only the HR list reports load failures to the user.
    pub fn alerts_on_failure(&self) -> bool {
        matches!(self, RequestScope::All)
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            RequestScope::Mine => "No leave requests yet.",
            RequestScope::All => "No requests found.",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn matches(&self, status: &RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => *status == RequestStatus::Pending,
            StatusFilter::Approved => *status == RequestStatus::Approved,
            StatusFilter::Rejected => *status == RequestStatus::Rejected,
        }
    }
}

pub fn filter_requests(requests: &[LeaveRequest], filter: StatusFilter) -> Vec<LeaveRequest> {
    requests
        .iter()
        .filter(|request| filter.matches(&request.status))
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::leave_request;
    use super::*;

    fn mixed() -> Vec<LeaveRequest> {
        vec![
            leave_request(1, RequestStatus::Approved),
            leave_request(2, RequestStatus::Pending),
            leave_request(3, RequestStatus::Rejected),
            leave_request(4, RequestStatus::Approved),
            leave_request(5, RequestStatus::Other("cancelled".into())),
        ]
    }

    fn ids(requests: &[LeaveRequest]) -> Vec<i64> {
        requests.iter().map(|r| r.id).collect()
    }

    #[test]
    fn approved_filter_keeps_matching_subset_in_order() {
        let filtered = filter_requests(&mixed(), StatusFilter::Approved);
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn all_filter_keeps_everything_including_unknown_statuses() {
        assert_eq!(ids(&filter_requests(&mixed(), StatusFilter::All)), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&filter_requests(&mixed(), StatusFilter::Pending)), vec![2]);
        assert_eq!(ids(&filter_requests(&mixed(), StatusFilter::Rejected)), vec![3]);
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
        assert_eq!(StatusFilter::OPTIONS[0], StatusFilter::All);
    }

    #[test]
    fn scope_controls_alerting_and_empty_text() {
        assert!(RequestScope::All.alerts_on_failure());
        assert!(!RequestScope::Mine.alerts_on_failure());
        assert_eq!(RequestScope::Mine.empty_message(), "No leave requests yet.");
        assert_eq!(RequestScope::All.empty_message(), "No requests found.");
    }
}
