//! View counter display.

/// Group digits in threes with commas, the way an en-US locale prints counts.
pub fn format_view_count(total_view: u64) -> String {
    let digits = total_view.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
