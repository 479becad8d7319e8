use crate::api::{LeaveRequest, RequestStatus};
use crate::utils::format::{format_day_count, format_timestamp_date};

pub fn status_badge_class(status: &RequestStatus) -> &'static str {
    match status {
        RequestStatus::Approved => "bg-green-100 text-green-800 border-green-300",
        RequestStatus::Rejected => "bg-red-100 text-red-800 border-red-300",
        RequestStatus::Pending => "bg-yellow-100 text-yellow-800 border-yellow-300",
        RequestStatus::Other(_) => "bg-gray-100 text-gray-800 border-gray-300",
    }
}

pub fn status_label(status: &RequestStatus) -> String {
    status.as_str().to_uppercase()
}

/// `"work from home"` becomes `"Work From Home Leave"`.
pub fn request_title(request_type: &str) -> String {
    request_type
        .split_whitespace()
        .map(capitalize)
        .chain(std::iter::once("Leave".to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn date_range(request: &LeaveRequest) -> String {
    format!("{} to {}", request.start_date, request.end_date)
}

pub fn duration_label(request: &LeaveRequest) -> String {
    format_day_count(request.duration_days)
}

pub fn reviewed_label(request: &LeaveRequest) -> Option<String> {
    let reviewer = request.reviewed_by_name.as_deref()?;
    let on = request
        .reviewed_at
        .as_deref()
        .map(format_timestamp_date)
        .unwrap_or_default();
    if on.is_empty() {
        Some(format!("Reviewed by: {}", reviewer))
    } else {
        Some(format!("Reviewed by: {} on {}", reviewer, on))
    }
}

pub fn created_label(request: &LeaveRequest) -> Option<String> {
    request
        .created_at
        .as_deref()
        .map(|raw| format!("Created: {}", format_timestamp_date(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::requests::types::fixtures::leave_request;

    #[test]
    fn badge_class_follows_status() {
        assert!(status_badge_class(&RequestStatus::Approved).contains("green"));
        assert!(status_badge_class(&RequestStatus::Rejected).contains("red"));
        assert!(status_badge_class(&RequestStatus::Pending).contains("yellow"));
        assert!(status_badge_class(&RequestStatus::Other("escalated".into())).contains("gray"));
    }

    #[test]
    fn labels_render_request_fields() {
        let mut request = leave_request(1, RequestStatus::Pending);
        assert_eq!(status_label(&request.status), "PENDING");
        assert_eq!(request_title(&request.request_type), "Annual Leave");
        assert_eq!(date_range(&request), "2025-01-10 to 2025-01-12");
        assert_eq!(duration_label(&request), "3 days");
        assert_eq!(created_label(&request).as_deref(), Some("Created: 2025-01-01"));
        assert!(reviewed_label(&request).is_none());

        request.reviewed_by_name = Some("Helen HR".into());
        assert_eq!(reviewed_label(&request).as_deref(), Some("Reviewed by: Helen HR"));
        request.reviewed_at = Some("2025-01-05T10:00:00".into());
        assert_eq!(
            reviewed_label(&request).as_deref(),
            Some("Reviewed by: Helen HR on 2025-01-05")
        );
    }

    #[test]
    fn unknown_status_label_is_verbatim_uppercase() {
        assert_eq!(status_label(&RequestStatus::Other("escalated".into())), "ESCALATED");
        assert_eq!(request_title(""), "Leave");
    }

    #[test]
    fn request_title_capitalizes_every_word() {
        assert_eq!(request_title("work from home"), "Work From Home Leave");
        assert_eq!(request_title("sick"), "Sick Leave");
        assert_eq!(request_title("  unpaid  personal "), "Unpaid Personal Leave");
    }
}
