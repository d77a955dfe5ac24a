use dichrona::{ReadReport, RunMetrics, StageMetrics};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the stage report of one run to stderr.
pub fn print_run(report: &ReadReport, metrics: &RunMetrics, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Annotating {} records", metrics.records), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Input ━━━", ansi::GRAY));
    print_input(report, &palette);

    eprintln!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    for stage in &metrics.stages {
        print_stage(stage, &palette);
    }

    eprintln!("\n{}", palette.paint("━━━ Coverage ━━━", ansi::GRAY));
    eprintln!(
        "  Annotated: {} → {} of {}  │  Markers added: {}",
        palette.dim(metrics.annotated_before.to_string()),
        palette.paint(metrics.annotated_after.to_string(), ansi::GREEN),
        metrics.records,
        palette.paint(metrics.markers_added().to_string(), ansi::BLUE),
    );

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let stages: Vec<String> = metrics
        .stages
        .iter()
        .filter(|s| !s.skipped)
        .map(|s| format!("{}: {}", s.stage, palette.dim(format!("{:?}", s.duration))))
        .collect();
    eprintln!("  Total: {}  │  {}", palette.paint(format!("{:?}", metrics.total), ansi::GREEN), stages.join("  │  "));
    eprintln!();
}

fn print_input(report: &ReadReport, palette: &ansi::Palette) {
    eprintln!(
        "  Lines: {}  │  Skipped: {}",
        palette.paint(report.lines.to_string(), ansi::BLUE),
        if report.skipped.is_empty() {
            palette.dim("0")
        } else {
            palette.paint(report.skipped.len().to_string(), ansi::YELLOW)
        }
    );
    for err in report.skipped.iter().take(5) {
        eprintln!("    {}", palette.dim(err.to_string()));
    }
    if report.skipped.len() > 5 {
        eprintln!("    {}", palette.dim(format!("... +{} more", report.skipped.len() - 5)));
    }
}

fn print_stage(stage: &StageMetrics, palette: &ansi::Palette) {
    let label = format!("{}:", stage.stage);
    if stage.skipped {
        eprintln!("  {} {}", palette.paint(label, ansi::BLUE), palette.dim("skipped (no source)"));
        return;
    }

    eprintln!(
        "  {} {}  {} {}",
        palette.paint(label, ansi::BLUE),
        if stage.updated > 0 {
            palette.paint(format!("✓ {} records", stage.updated), ansi::GREEN)
        } else {
            palette.dim(format!("✗ {} records", stage.updated))
        },
        palette.dim("│ markers:"),
        palette.paint(stage.markers_added.to_string(), ansi::YELLOW),
    );
    for hit in &stage.rule_hits {
        eprintln!("    {} {}", palette.paint(hit.rule, ansi::CYAN), palette.dim(format!("×{}", hit.hits)));
    }
}
