use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center text-gray-500 mt-8">
            <p>{title}</p>
            {description.filter(|desc| !desc.is_empty()).map(|desc| view! { <p class="text-sm mt-2">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_optional_description() {
        let html = render_to_string(|| {
            view! { <EmptyState title="No leave requests yet." description="Use the chat to create a leave request!" /> }
        });
        assert!(html.contains("No leave requests yet."));
        assert!(html.contains("Use the chat to create a leave request!"));

        let bare = render_to_string(|| view! { <EmptyState title="No requests found." /> });
        assert!(bare.contains("No requests found."));
        assert!(!bare.contains("text-sm mt-2"));
    }
}
