pub mod input_box;
pub mod message_bubble;
pub mod transcript_view;
