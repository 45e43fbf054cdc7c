use crate::config::constants::MIN_PREVIEW_WIDTH;
use crate::structs::generation_config::GenerationConfig;
use crate::structs::sweep_item_result::SweepItemResult;
use crate::structs::sweep_progress::SweepProgress;
use crate::structs::sweep_result::SweepResult;

/// Width taken by the `#`, parameter columns and separators of a row.
const FIXED_COLUMNS_WIDTH: usize = 40;

pub struct SweepResultLogger;

impl SweepResultLogger {
    /// Output column width: the configured preview width, narrowed to fit
    /// the terminal when one is attached.
    pub fn output_width(preview_width: usize) -> usize {
        let width = match terminal_size::terminal_size() {
            Some((terminal_size::Width(columns), _)) => {
                preview_width.min((columns as usize).saturating_sub(FIXED_COLUMNS_WIDTH))
            }
            None => preview_width,
        };

        width.max(MIN_PREVIEW_WIDTH)
    }

    pub fn header() -> String {
        format!(
            "{:>4} | {:>5} | {:>6} | {:>5} | {:>5} | {}",
            "#", "Temp", "Tokens", "PP", "FP", "Output"
        )
    }

    pub fn format_row(index: usize, item: &SweepItemResult, width: usize) -> String {
        let params = &item.parameters;
        format!(
            "{:>4} | {:>5.1} | {:>6} | {:>5.1} | {:>5.1} | {}",
            index + 1,
            params.temperature,
            params.max_tokens,
            params.presence_penalty,
            params.frequency_penalty,
            Self::preview(&item.display_output(), width)
        )
    }

    /// Single-line preview: newlines folded to spaces, cut at `width` chars.
    pub fn preview(text: &str, width: usize) -> String {
        let flattened: String = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if flattened.chars().count() <= width {
            return flattened;
        }

        let mut cut: String = flattened.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }

    pub fn print_header(total: usize) {
        println!("\n🧪 Running {} combinations", total);
        println!("{}", Self::header());
        println!("{}", "━".repeat(FIXED_COLUMNS_WIDTH + MIN_PREVIEW_WIDTH));
    }

    pub fn print_progress(progress: &SweepProgress, width: usize) {
        println!("{}", Self::format_row(progress.index, &progress.item, width));
    }

    pub fn print_summary(result: &SweepResult) {
        println!("{}", "━".repeat(FIXED_COLUMNS_WIDTH + MIN_PREVIEW_WIDTH));

        if result.cancelled {
            println!("⏹️  Sweep cancelled after {} combinations", result.len());
        } else {
            println!("✅ Sweep complete: {} combinations", result.len());
        }

        println!("   ✔ {} responses   ✘ {} errors", result.success_count(), result.failure_count());

        if let Some(elapsed) = result.elapsed_secs() {
            println!("   ⏱️  {:.1}s", elapsed);
        }
    }

    pub fn print_full_outputs(result: &SweepResult) {
        for (index, item) in result.iter().enumerate() {
            println!("\n━━━ #{} ━━━ {}", index + 1, item.parameters);
            println!("{}", item.display_output());
        }
    }

    /// Output of a single generation followed by its parameter summary.
    /// A failed call shows `Error: <message>` in place of the response.
    pub fn format_single(config: &GenerationConfig, item: &SweepItemResult) -> String {
        format!("{}\n\n{}", item.display_output(), config.summary())
    }

    pub fn print_single(config: &GenerationConfig, item: &SweepItemResult) {
        println!("\n{}", Self::format_single(config, item));
    }
}
