//! Page document builder and reveal-aware renderer.
//!
//! The portfolio renders as one vertical document of styled lines: a
//! hero block, the four anchored sections, and a footer. The document
//! is rebuilt each frame for the current width, filter, and theme, so
//! section extents always match what is on screen. Sections that have
//! not finished their reveal transition render faded toward the
//! background and settled a couple of rows upward over the transition.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::constants::REVEAL_OFFSET_ROWS;
use crate::export;
use crate::filter::{filter_skills, SkillSelection};
use crate::models::Portfolio;
use crate::reveal::{RevealRegistry, SectionId};

use super::Theme;

/// Widest text column the page will use, regardless of terminal size.
const MAX_COLUMN: usize = 76;
/// Narrowest column before lines are allowed to clip.
const MIN_COLUMN: usize = 20;

/// One contiguous run of document rows.
struct SectionBlock {
    /// None for the hero and footer, which never animate.
    id: Option<SectionId>,
    lines: Vec<Line<'static>>,
}

/// The full page laid out for one terminal width.
pub struct PageDocument {
    blocks: Vec<SectionBlock>,
    total: usize,
}

impl PageDocument {
    /// Lays the portfolio out as a document of styled lines.
    #[must_use]
    pub fn build(
        portfolio: &Portfolio,
        filter: SkillSelection,
        theme: &Theme,
        width: u16,
    ) -> Self {
        let col = usize::from(width).saturating_sub(4).clamp(MIN_COLUMN, MAX_COLUMN);
        let margin = (usize::from(width).saturating_sub(col)) / 2;
        let layouter = Layouter { theme, col, margin };

        let blocks = vec![
            SectionBlock {
                id: None,
                lines: hero_lines(portfolio, &layouter),
            },
            SectionBlock {
                id: Some(SectionId::About),
                lines: about_lines(portfolio, &layouter),
            },
            SectionBlock {
                id: Some(SectionId::Skills),
                lines: skills_lines(portfolio, filter, &layouter),
            },
            SectionBlock {
                id: Some(SectionId::Experience),
                lines: experience_lines(portfolio, &layouter),
            },
            SectionBlock {
                id: Some(SectionId::Contact),
                lines: contact_lines(portfolio, &layouter),
            },
            SectionBlock {
                id: None,
                lines: footer_lines(portfolio, &layouter),
            },
        ];
        let total = blocks.iter().map(|block| block.lines.len()).sum();
        Self { blocks, total }
    }

    /// Total document height in rows.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total
    }

    /// Document row range of a section as `(top, height)`.
    #[must_use]
    pub fn section_extent(&self, id: SectionId) -> Option<(usize, usize)> {
        let mut top = 0;
        for block in &self.blocks {
            if block.id == Some(id) {
                return Some((top, block.lines.len()));
            }
            top += block.lines.len();
        }
        None
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub const fn max_scroll(&self, viewport_rows: usize) -> usize {
        self.total.saturating_sub(viewport_rows)
    }

    /// Produces the visible slice of the document with reveal fades
    /// and settle offsets applied.
    #[must_use]
    pub fn render_lines(
        &self,
        scroll: usize,
        viewport_rows: usize,
        registry: &RevealRegistry,
        reduce_motion: bool,
        now: Instant,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let mut rows: Vec<Line<'static>> = Vec::with_capacity(self.total);
        for block in &self.blocks {
            match block.id {
                None => rows.extend(block.lines.iter().cloned()),
                Some(id) => {
                    let progress = effective_progress(registry, id, reduce_motion, now);
                    if progress >= 1.0 {
                        rows.extend(block.lines.iter().cloned());
                    } else {
                        // Settle from a couple of rows down while fading in.
                        // Blanks on top and a clipped tail keep the block
                        // height, and with it every extent, stable.
                        let offset = settle_offset(progress);
                        for _ in 0..offset {
                            rows.push(Line::from(""));
                        }
                        let keep = block.lines.len().saturating_sub(offset);
                        for line in block.lines.iter().take(keep) {
                            rows.push(fade_line(line, theme, progress));
                        }
                    }
                }
            }
        }

        let start = scroll.min(self.total);
        rows.into_iter().skip(start).take(viewport_rows).collect()
    }
}

/// Transition progress honoring the reduced-motion preference, which
/// snaps a revealed section straight to its final state.
fn effective_progress(
    registry: &RevealRegistry,
    id: SectionId,
    reduce_motion: bool,
    now: Instant,
) -> f32 {
    if reduce_motion {
        if registry.is_shown(id) {
            1.0
        } else {
            0.0
        }
    } else {
        registry.progress(id, now)
    }
}

/// Rows a section still sits below its settled position.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn settle_offset(progress: f32) -> usize {
    (f32::from(REVEAL_OFFSET_ROWS) * (1.0 - progress.clamp(0.0, 1.0))).round() as usize
}

/// Re-colors a line toward the background for a partial reveal.
fn fade_line(line: &Line<'static>, theme: &Theme, progress: f32) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|span| {
            let mut style = span.style;
            let fg = style.fg.unwrap_or(theme.text);
            style.fg = Some(theme.faded(fg, progress));
            if let Some(bg) = style.bg {
                style.bg = Some(theme.faded(bg, progress));
            }
            Span::styled(span.content.clone(), style)
        })
        .collect();
    Line::from(spans)
}

/// Shared column geometry and theme for line building.
struct Layouter<'a> {
    theme: &'a Theme,
    col: usize,
    margin: usize,
}

impl Layouter<'_> {
    fn pad(&self) -> Span<'static> {
        Span::raw(" ".repeat(self.margin))
    }

    /// A single line from pre-styled spans, margin applied.
    fn line(&self, spans: Vec<Span<'static>>) -> Line<'static> {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(self.pad());
        all.extend(spans);
        Line::from(all)
    }

    /// Wraps a paragraph into margin-padded lines of one style.
    fn wrapped(&self, text: &str, style: Style) -> Vec<Line<'static>> {
        wrap_text(text, self.col)
            .into_iter()
            .map(|row| self.line(vec![Span::styled(row, style)]))
            .collect()
    }

    /// Packs pre-padded chips onto as few lines as fit the column.
    fn pack(&self, chips: Vec<(String, Style)>) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = vec![self.pad()];
        let mut used = 0usize;
        for (text, style) in chips {
            let chip_width = text.chars().count();
            if used > 0 && used + 1 + chip_width > self.col {
                lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(self.pad());
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(text, style));
            used += chip_width;
        }
        if spans.len() > 1 {
            lines.push(Line::from(spans));
        }
        lines
    }

    fn section_heading(&self, id: SectionId) -> Vec<Line<'static>> {
        vec![
            self.line(vec![Span::styled(
                id.title().to_string(),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )]),
            self.line(vec![Span::styled(
                section_subtitle(id).to_string(),
                Style::default().fg(self.theme.text_muted),
            )]),
            Line::from(""),
        ]
    }
}

/// Section strapline rendered under each heading.
const fn section_subtitle(id: SectionId) -> &'static str {
    match id {
        SectionId::About => "A concise summary recruiters can scan in 10 seconds.",
        SectionId::Skills => "Focused and relevant — no fluff.",
        SectionId::Experience => "Clear, impact-focused bullets.",
        SectionId::Contact => "One clean CTA — recruiter-friendly.",
    }
}

fn hero_lines(portfolio: &Portfolio, layouter: &Layouter) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    let profile = &portfolio.profile;

    let mut lines = vec![
        Line::from(""),
        layouter.line(vec![
            Span::styled(
                format!(" {} ", profile.monogram()),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        layouter.line(vec![Span::styled(
            profile.title.clone(),
            Style::default().fg(theme.text_secondary),
        )]),
        layouter.line(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::styled(
                profile.availability.clone(),
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(layouter.wrapped(
        &profile.tagline,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ));
    lines.extend(layouter.wrapped(&profile.intro, Style::default().fg(theme.text)));
    lines.push(Line::from(""));

    if !profile.chips.is_empty() {
        let chip_style = Style::default().fg(theme.text_secondary).bg(theme.surface);
        let chips = profile
            .chips
            .iter()
            .map(|chip| (format!(" {chip} "), chip_style))
            .collect();
        lines.extend(layouter.pack(chips));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines
}

fn about_lines(portfolio: &Portfolio, layouter: &Layouter) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    let profile = &portfolio.profile;

    let mut lines = layouter.section_heading(SectionId::About);
    lines.extend(layouter.wrapped(&profile.summary, Style::default().fg(theme.text)));
    lines.push(Line::from(""));

    for (label, value) in [("Focus:", &profile.focus), ("Strength:", &profile.strength)] {
        lines.push(layouter.line(vec![
            Span::styled(
                format!("{label:<10}"),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(value.clone(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines
}

fn skills_lines(
    portfolio: &Portfolio,
    filter: SkillSelection,
    layouter: &Layouter,
) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    let mut lines = layouter.section_heading(SectionId::Skills);

    // Filter pill bar, active pill inverted.
    let pills = SkillSelection::ALL
        .iter()
        .map(|selection| {
            let style = if *selection == filter {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary).bg(theme.surface)
            };
            (format!(" {} ", selection.label()), style)
        })
        .collect();
    lines.extend(layouter.pack(pills));
    lines.push(Line::from(""));

    let visible = filter_skills(&portfolio.skills, filter);
    if visible.is_empty() {
        lines.extend(layouter.wrapped(
            "No skills in this group.",
            Style::default().fg(theme.text_muted),
        ));
    } else {
        let chip_style = Style::default().fg(theme.text).bg(theme.surface);
        let chips = visible
            .iter()
            .map(|skill| (format!(" {} ", skill.label), chip_style))
            .collect();
        lines.extend(layouter.pack(chips));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines
}

fn experience_lines(portfolio: &Portfolio, layouter: &Layouter) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    let mut lines = layouter.section_heading(SectionId::Experience);

    for entry in &portfolio.experience {
        lines.push(layouter.line(vec![Span::styled(
            entry.heading(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(layouter.line(vec![Span::styled(
            entry.period.clone(),
            Style::default().fg(theme.text_muted),
        )]));
        for bullet in &entry.bullets {
            let rows = wrap_text(bullet, layouter.col.saturating_sub(4).max(1));
            for (i, row) in rows.into_iter().enumerate() {
                let prefix = if i == 0 { "  - " } else { "    " };
                lines.push(layouter.line(vec![
                    Span::styled(prefix, Style::default().fg(theme.text_muted)),
                    Span::styled(row, Style::default().fg(theme.text_secondary)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines
}

fn contact_lines(portfolio: &Portfolio, layouter: &Layouter) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    let links = &portfolio.links;

    let mut lines = layouter.section_heading(SectionId::Contact);
    lines.push(layouter.line(vec![Span::styled(
        "Let's connect",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )]));
    lines.extend(layouter.wrapped(&links.note, Style::default().fg(theme.text_secondary)));
    lines.push(Line::from(""));

    let mut rows: Vec<(&str, &str)> = vec![
        ("Email:", links.email.as_str()),
        ("LinkedIn:", links.linkedin.as_str()),
    ];
    if links.has_cv() {
        rows.push(("CV:", links.cv.as_deref().unwrap_or_default()));
    }
    for (label, value) in rows {
        lines.push(layouter.line(vec![
            Span::styled(
                format!("{label:<10}"),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(value.to_string(), Style::default().fg(theme.accent)),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(layouter.wrapped(
        "Press c to copy the email address.",
        Style::default().fg(theme.text_muted),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines
}

fn footer_lines(portfolio: &Portfolio, layouter: &Layouter) -> Vec<Line<'static>> {
    let theme = layouter.theme;
    vec![
        layouter.line(vec![Span::styled(
            "─".repeat(layouter.col),
            Style::default().fg(theme.surface),
        )]),
        layouter.line(vec![Span::styled(
            export::footer_line(portfolio),
            Style::default().fg(theme.text_muted),
        )]),
        Line::from(""),
    ]
}

/// Greedy word wrap on character counts.
///
/// Words longer than the column are hard-split so no row ever exceeds
/// `width` characters.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        if word_len > width {
            for ch in word.chars() {
                if current_len == width {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(ch);
                current_len += 1;
            }
        } else {
            current.push_str(word);
            current_len += word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
