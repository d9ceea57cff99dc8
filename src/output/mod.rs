pub mod formatter;

pub use formatter::{
    format_question_list, format_results, format_results_json, get_terminal_width,
    recommendation_headline, score_bar, score_label, should_use_colors, wrap_text,
};
