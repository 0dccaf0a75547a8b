//! Reusable UI components.

pub mod assignment_card;
pub mod calculator_pad;
pub mod calendar_picker;
pub mod classroom_card;
pub mod classroom_dialog;
pub mod flashcard;
pub mod global_modal;
pub mod material_card;
pub mod nav_bar;
pub mod network_banner;
pub mod post_composer;
pub mod radar_chart;
pub mod stream_post;
pub mod submission_row;
pub mod verification_banner;
