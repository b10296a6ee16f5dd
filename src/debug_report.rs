use silaba::{AnalysisVerbose, PatternKind, RrHit, TokenSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
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

pub fn print_run(input: &str, res: &AnalysisVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Analyzing: \"{}\"", input.trim_end()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if details.tokens.is_empty() {
        println!("{}", palette.dim("  No words found"));
    } else {
        for token in &details.tokens {
            println!("  {}", fmt_token(token, &palette));
        }
    }
    if details.unlocated > 0 || details.dropped_hits > 0 {
        println!(
            "  {}",
            palette.paint(
                format!("skipped {} token(s), dropped {} hit(s)", details.unlocated, details.dropped_hits),
                ansi::YELLOW
            )
        );
    }

    println!("\n{}", palette.paint("━━━ Hits ━━━", ansi::GRAY));
    if res.analysis.hits.is_empty() {
        println!("{}", palette.dim("  No R sounds found"));
        println!("\n{}", palette.dim("  Tip: Set SILABA_DEBUG=1 to see routing decisions"));
    } else {
        for (idx, hit) in res.analysis.hits.iter().enumerate() {
            print_hit(idx, hit, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Highlighted ━━━", ansi::GRAY));
    println!("  {}", res.analysis.highlighted_text.trim_end());

    let stats = &res.analysis.statistics;
    println!("\n{}", palette.paint("━━━ Statistics ━━━", ansi::GRAY));
    println!(
        "  Patterns: {}  │  Double RR: {}  │  Single R: {}  │  Words: {}",
        palette.paint(stats.total_patterns.to_string(), ansi::GREEN),
        palette.paint(stats.by_pattern_kind.get(&PatternKind::DoubleRr).copied().unwrap_or(0).to_string(), ansi::RED),
        palette.paint(stats.by_pattern_kind.get(&PatternKind::SingleR).copied().unwrap_or(0).to_string(), ansi::BLUE),
        palette.paint(stats.unique_words.to_string(), ansi::CYAN),
    );
    for (difficulty, count) in &stats.by_difficulty {
        println!("  {} {}", palette.dim(format!("{difficulty}:")), count);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Syllabify: {}  │  Highlight: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.syllabify), ansi::CYAN),
        palette.dim(format!("{:?}", details.highlight)),
    );
    println!();
}

fn print_hit(idx: usize, hit: &RrHit, palette: &ansi::Palette) {
    let kind_color = match hit.kind {
        PatternKind::DoubleRr => ansi::RED,
        PatternKind::SingleR => ansi::BLUE,
    };

    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.bold(palette.paint(&hit.syllable, ansi::GREEN)),
        palette.dim("│"),
        palette.paint(format!("span {}..{}", hit.start, hit.end), ansi::YELLOW),
    );
    println!(
        "      {} {}  {} {}  {} {}",
        palette.dim("word:"),
        palette.paint(&hit.word, ansi::CYAN),
        palette.dim("│ kind:"),
        palette.paint(format!("{:?}", hit.kind), kind_color),
        palette.dim("│"),
        palette.dim(&hit.pronunciation),
    );
}

fn fmt_token(token: &TokenSummary, palette: &ansi::Palette) -> String {
    let prefix = match &token.prefix {
        Some(prefix) => palette.dim(format!(" prefix:{prefix}")),
        None => String::new(),
    };

    format!(
        "{} {} {} {}{}",
        palette.paint(format!("{}..{}", token.start, token.end), ansi::YELLOW),
        palette.bold(&token.token),
        palette.paint(token.syllables.join("-"), ansi::GREEN),
        palette.paint(format!("{:?}", token.route), ansi::BLUE),
        prefix,
    )
}
