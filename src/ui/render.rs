use crate::carousel::Role;
use crate::content::{
    Page, Slide, ABOUT_FEATURES, BRAND, CONTACT_DETAILS, EXPERTS, FORUM_CATEGORIES, STATS, TEAM,
    TESTIMONIALS,
};
use crate::contact::ContactField;
use crate::predictor::{FieldKind, PredictionStatus, ProfileField};
use crate::ui::app::{App, StatusKind};
use crate::ui::placement::{slot_areas, Slot};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();

    frame.render_widget(Block::new().style(Style::new().bg(theme.bg)), frame.area());

    let [header, body, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, &theme, header);

    let carousel_area = match app.page {
        Page::Home => render_home(frame, app, &theme, body),
        Page::CareerPredictor => {
            render_predictor(frame, app, &theme, body);
            None
        }
        Page::Forum => {
            render_forum(frame, app, &theme, body);
            None
        }
        Page::Expert => {
            render_experts(frame, app, &theme, body);
            None
        }
        Page::About => {
            render_about(frame, &theme, body);
            None
        }
        Page::Contact => {
            render_contact(frame, app, &theme, body);
            None
        }
    };
    app.set_carousel_area(carousel_area);

    render_status(frame, app, &theme, status);
    render_footer(frame, app, &theme, footer);

    if app.show_help {
        render_help(frame, &theme);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let [brand_area, tabs_area] =
        Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!("🚀 {BRAND}"),
        Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT)
            .border_style(Style::new().fg(theme.accent)),
    );
    frame.render_widget(brand, brand_area);

    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {} {}", i + 1, page.icon(), page.label()));
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(Style::new().fg(theme.fg_dim))
        .highlight_style(Style::new().fg(theme.accent).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::new().fg(theme.fg_dim)))
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT)
                .border_style(Style::new().fg(theme.accent)),
        );
    frame.render_widget(tabs, tabs_area);
}

fn page_heading(frame: &mut Frame, page: Page, theme: &Theme, area: Rect) {
    let (title, tagline) = page.heading();
    let text = vec![
        Line::from(Span::styled(
            title,
            Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tagline, Style::new().fg(theme.fg_dim))),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

/// Draws the home page and returns the area covered by the carousel slots.
fn render_home(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) -> Option<Rect> {
    let [heading, slots, indicator, stats, testimonials] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area.inner(Margin::new(1, 0)));

    page_heading(frame, Page::Home, theme, heading);
    render_carousel(frame, app, theme, slots);
    render_carousel_indicator(frame, app, theme, indicator);
    render_stats(frame, theme, stats);
    render_testimonials(frame, theme, testimonials);

    Some(slots)
}

fn render_carousel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let ring = app.carousel.ring();
    if ring.is_empty() {
        let empty = Paragraph::new("No slides configured")
            .style(Style::new().fg(theme.fg_dim))
            .block(Block::bordered().border_style(Style::new().fg(theme.fg_dim)));
        frame.render_widget(empty, area);
        return;
    }

    for (slot, slot_area) in Slot::ALL.into_iter().zip(slot_areas(area)) {
        if let Some(slide) = ring.slide_with(slot.role()) {
            render_slide(frame, slide, slot.role(), theme, slot_area);
        }
    }
}

/// Visual treatment per role: border color and emphasis.
fn slide_style(role: Role, theme: &Theme) -> Style {
    match role {
        Role::Main => Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        Role::Left | Role::Right => Style::new().fg(theme.secondary),
        Role::None => Style::new().fg(theme.fg_dim),
    }
}

fn render_slide(frame: &mut Frame, slide: &Slide, role: Role, theme: &Theme, area: Rect) {
    let style = slide_style(role, theme);
    let text_style = if role == Role::Main {
        Style::new().fg(theme.fg)
    } else {
        Style::new().fg(theme.fg_dim)
    };

    let marker = match role {
        Role::Left => "◀ ",
        Role::Right => " ▶",
        _ => "",
    };
    let title = match role {
        Role::Left => format!("{marker}{}", slide.title),
        _ => format!("{}{marker}", slide.title),
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(title, style)),
        Line::from(""),
        Line::from(Span::styled(slide.caption.clone(), text_style)),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().border_style(style));

    frame.render_widget(paragraph, area);
}

fn render_carousel_indicator(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let ring = app.carousel.ring();
    let mut spans: Vec<Span> = ring
        .iter()
        .map(|item| {
            if item.role == Role::Main {
                Span::styled("● ", Style::new().fg(theme.accent))
            } else {
                Span::styled("○ ", Style::new().fg(theme.fg_dim))
            }
        })
        .collect();

    let mode = if app.carousel.is_auto_advancing() {
        "auto"
    } else {
        "manual"
    };
    spans.push(Span::styled(
        format!("  {}/{} · {mode}", ring.start_item(), ring.len()),
        Style::new().fg(theme.fg_dim),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_stats(frame: &mut Frame, theme: &Theme, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (stat, column) in STATS.iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(
                stat.number,
                Style::new().fg(theme.secondary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label, Style::new().fg(theme.fg_dim))),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            *column,
        );
    }
}

fn render_testimonials(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    for testimonial in TESTIMONIALS {
        lines.push(Line::from(vec![
            Span::styled(
                "★".repeat(usize::from(testimonial.rating)),
                Style::new().fg(theme.secondary),
            ),
            Span::raw("  "),
            Span::styled(
                format!("\"{}\"", testimonial.content),
                Style::new().fg(theme.fg),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    - {}, {}", testimonial.name, testimonial.role),
            Style::new().fg(theme.fg_dim),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .title(" Success Stories ")
            .border_style(Style::new().fg(theme.fg_dim)),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Career predictor
// ---------------------------------------------------------------------------

fn render_predictor(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let [heading, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    page_heading(frame, Page::CareerPredictor, theme, heading);

    let [form_area, results_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(content);

    render_profile_form(frame, app, theme, form_area);
    render_predictions(frame, app, theme, results_area);
}

fn render_profile_form(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let profile = &app.predictor.profile;
    let selected = app.predictor.selected_index();

    let mut previous_section = "";
    let items: Vec<ListItem> = ProfileField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let mut lines = Vec::new();
            if field.section() != previous_section {
                previous_section = field.section();
                lines.push(Line::from(Span::styled(
                    field.section(),
                    Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
                )));
            }

            let value = profile.display_value(*field);
            let value_span = match field.kind() {
                FieldKind::Rating => Span::styled(
                    rating_bar(&value),
                    Style::new().fg(theme.secondary),
                ),
                FieldKind::Text if value.is_empty() => Span::styled(
                    field.placeholder().unwrap_or_default(),
                    Style::new().fg(theme.fg_dim).add_modifier(Modifier::ITALIC),
                ),
                FieldKind::Text => Span::styled(value, Style::new().fg(theme.fg)),
                FieldKind::Toggle | FieldKind::Select | FieldKind::Count => {
                    Span::styled(format!("‹ {value} ›"), Style::new().fg(theme.fg))
                }
            };

            let cursor = if i == selected && field.is_text() { "▏" } else { "" };
            let line_style = if i == selected {
                Style::new().bg(theme.highlight_bg)
            } else {
                Style::new()
            };
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("  {:<34}", field.label()),
                        Style::new().fg(theme.fg_dim),
                    ),
                    value_span,
                    Span::styled(cursor, Style::new().fg(theme.accent)),
                ])
                .style(line_style),
            );
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(selected));
    let list = List::new(items).block(
        Block::bordered()
            .title(" 🧠 Your Profile ")
            .border_style(Style::new().fg(theme.accent)),
    );
    frame.render_stateful_widget(list, area, &mut state);
}

fn rating_bar(value: &str) -> String {
    let filled = value.parse::<usize>().unwrap_or_default().min(10);
    format!("{}{} {value}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn render_predictions(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::bordered()
        .title(" Your Career Predictions ")
        .border_style(Style::new().fg(theme.fg_dim));

    let lines: Vec<Line> = match app.predictor.status() {
        PredictionStatus::Idle => vec![
            Line::from(Span::styled(
                "Fill out the form and press Enter to get personalized career \
                 recommendations.",
                Style::new().fg(theme.fg_dim),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Get Prediction   [Ctrl+r] Reset Form",
                Style::new().fg(theme.accent),
            )),
        ],
        PredictionStatus::Loading => {
            let frame_index = (chrono::Utc::now().timestamp_subsec_millis() / 250) as usize;
            vec![Line::from(Span::styled(
                format!("{} Analyzing your profile...", SPINNER[frame_index % SPINNER.len()]),
                Style::new().fg(theme.secondary),
            ))]
        }
        PredictionStatus::Ready(predictions) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Based on your inputs, here are your top career matches:",
                    Style::new().fg(theme.fg_dim),
                )),
                Line::from(""),
            ];
            for prediction in predictions {
                lines.push(Line::from(vec![
                    Span::styled(
                        prediction.career.clone(),
                        Style::new().fg(theme.fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("{}% Match", prediction.match_percent()),
                        Style::new().fg(theme.success).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    prediction.description.clone(),
                    Style::new().fg(theme.fg_dim),
                )));
                lines.push(Line::from(vec![
                    Span::styled("📈 Growth Rate: ", Style::new().fg(theme.fg_dim)),
                    Span::styled(
                        prediction.growth_rate.clone(),
                        Style::new().fg(theme.secondary),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Skills to Develop: ", Style::new().fg(theme.fg_dim)),
                    Span::styled(
                        prediction.skills_needed.join(" · "),
                        Style::new().fg(theme.accent),
                    ),
                ]));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                "[Ctrl+s] Download Report",
                Style::new().fg(theme.accent),
            )));
            lines
        }
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

// ---------------------------------------------------------------------------
// Forum
// ---------------------------------------------------------------------------

fn render_forum(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let [heading, topics, posts] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);
    page_heading(frame, Page::Forum, theme, heading);

    let tabs = Tabs::new(FORUM_CATEGORIES)
        .select(app.forum_category)
        .style(Style::new().fg(theme.fg_dim))
        .highlight_style(Style::new().fg(theme.secondary).add_modifier(Modifier::BOLD))
        .block(
            Block::bordered()
                .title(" Topics ◀ ▶ ")
                .border_style(Style::new().fg(theme.fg_dim)),
        );
    frame.render_widget(tabs, topics);

    let filtered = app.filtered_posts();
    let mut lines = Vec::new();
    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No discussions in {} yet.", app.forum_category_name()),
            Style::new().fg(theme.fg_dim),
        )));
    }
    for post in filtered {
        lines.push(Line::from(vec![
            Span::styled(
                post.title,
                Style::new().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", post.category), Style::new().fg(theme.accent)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("by {} · {}", post.author, post.time),
            Style::new().fg(theme.fg_dim),
        )));
        lines.push(Line::from(Span::styled(post.excerpt, Style::new().fg(theme.fg))));
        lines.push(Line::from(Span::styled(
            format!("👍 {}   💬 {} replies", post.likes, post.replies),
            Style::new().fg(theme.secondary),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" 💬 Discussions ")
                .border_style(Style::new().fg(theme.accent)),
        ),
        posts,
    );
}

// ---------------------------------------------------------------------------
// Experts
// ---------------------------------------------------------------------------

fn render_experts(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let [heading, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    page_heading(frame, Page::Expert, theme, heading);

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content);

    let items: Vec<ListItem> = EXPERTS
        .iter()
        .map(|expert| {
            ListItem::new(vec![
                Line::from(Span::styled(expert.name, Style::new().fg(theme.fg))),
                Line::from(Span::styled(expert.title, Style::new().fg(theme.fg_dim))),
            ])
        })
        .collect();
    let mut state = ListState::default().with_selected(Some(app.selected_expert));
    let list = List::new(items)
        .highlight_style(Style::new().bg(theme.highlight_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .block(
            Block::bordered()
                .title(" 👥 Experts ")
                .border_style(Style::new().fg(theme.accent)),
        );
    frame.render_stateful_widget(list, list_area, &mut state);

    let expert = &EXPERTS[app.selected_expert];
    let details = vec![
        Line::from(Span::styled(
            expert.name,
            Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(expert.title, Style::new().fg(theme.fg_dim))),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", expert.rating), Style::new().fg(theme.secondary)),
            Span::styled(
                format!(" ({} reviews)", expert.reviews),
                Style::new().fg(theme.fg_dim),
            ),
        ]),
        Line::from(vec![
            Span::styled("Experience: ", Style::new().fg(theme.fg_dim)),
            Span::raw(expert.experience),
        ]),
        Line::from(vec![
            Span::styled("Rate: ", Style::new().fg(theme.fg_dim)),
            Span::raw(expert.price),
        ]),
        Line::from(vec![
            Span::styled("Specialties: ", Style::new().fg(theme.fg_dim)),
            Span::styled(expert.specialties.join(" · "), Style::new().fg(theme.accent)),
        ]),
        Line::from(""),
        Line::from(Span::styled(expert.bio, Style::new().fg(theme.fg))),
    ];
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" Profile ")
                .border_style(Style::new().fg(theme.fg_dim)),
        ),
        detail_area,
    );
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

fn render_about(frame: &mut Frame, theme: &Theme, area: Rect) {
    let [heading, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    page_heading(frame, Page::About, theme, heading);

    let [features_area, team_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(content);

    let mut features = Vec::new();
    for feature in ABOUT_FEATURES {
        features.push(Line::from(Span::styled(
            format!("{} {}", feature.icon, feature.title),
            Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        features.push(Line::from(Span::styled(
            feature.description,
            Style::new().fg(theme.fg),
        )));
        features.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(features).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" ℹ️  Who We Are ")
                .border_style(Style::new().fg(theme.accent)),
        ),
        features_area,
    );

    let mut team = Vec::new();
    for member in TEAM {
        team.push(Line::from(Span::styled(
            member.name,
            Style::new().fg(theme.fg).add_modifier(Modifier::BOLD),
        )));
        team.push(Line::from(Span::styled(member.role, Style::new().fg(theme.secondary))));
        team.push(Line::from(Span::styled(member.bio, Style::new().fg(theme.fg_dim))));
        team.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(team).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" Meet Our Team ")
                .border_style(Style::new().fg(theme.fg_dim)),
        ),
        team_area,
    );
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

fn render_contact(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let [heading, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    page_heading(frame, Page::Contact, theme, heading);

    let [details_area, form_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content);

    let mut details = vec![
        Line::from(Span::styled(
            "Get in Touch",
            Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for detail in CONTACT_DETAILS {
        details.push(Line::from(Span::styled(
            format!("{} {}", detail.icon, detail.label),
            Style::new().fg(theme.secondary),
        )));
        for line in detail.lines {
            details.push(Line::from(Span::styled(
                format!("   {line}"),
                Style::new().fg(theme.fg),
            )));
        }
        details.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" 📞 Contact ")
                .border_style(Style::new().fg(theme.fg_dim)),
        ),
        details_area,
    );

    let selected = app.contact.selected_field();
    let mut lines = Vec::new();
    for field in ContactField::ALL {
        let value = app.contact.value(field);
        let is_selected = field == selected;
        let value_span = if value.is_empty() {
            Span::styled(
                field.placeholder(),
                Style::new().fg(theme.fg_dim).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(value.to_string(), Style::new().fg(theme.fg))
        };
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::new().fg(theme.fg_dim),
        )));
        let mut spans = vec![Span::raw("  "), value_span];
        if is_selected {
            spans.push(Span::styled("▏", Style::new().fg(theme.accent)));
        }
        let style = if is_selected {
            Style::new().bg(theme.highlight_bg)
        } else {
            Style::new()
        };
        lines.push(Line::from(spans).style(style));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[Enter] Send Message",
        Style::new().fg(theme.accent),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .title(" ✉️  Send us a Message ")
                .border_style(Style::new().fg(theme.accent)),
        ),
        form_area,
    );
}

// ---------------------------------------------------------------------------
// Status, footer, help
// ---------------------------------------------------------------------------

fn render_status(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => theme.success,
        StatusKind::Error => theme.error,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", status.text), Style::new().fg(color))),
        area,
    );
}

fn footer_hint(app: &App) -> &'static str {
    match app.page {
        Page::Home => "[←→] Slides  [Tab] Next Page  [1-6] Jump  [t] Theme  [?] Help  [q] Quit",
        Page::CareerPredictor if app.editing_text() => {
            "[Type] Edit  [↑↓] Field  [Enter] Predict  [Ctrl+r] Reset  [Tab] Next Page  [Esc] Quit"
        }
        Page::CareerPredictor => {
            "[↑↓] Field  [←→] Adjust  [Enter] Predict  [Ctrl+r] Reset  [Ctrl+s] Save  [q] Quit"
        }
        Page::Forum => "[←→] Topic  [Tab] Next Page  [1-6] Jump  [?] Help  [q] Quit",
        Page::Expert => "[↑↓] Expert  [Tab] Next Page  [1-6] Jump  [?] Help  [q] Quit",
        Page::About => "[Tab] Next Page  [1-6] Jump  [t] Theme  [?] Help  [q] Quit",
        Page::Contact => "[Type] Edit  [↑↓] Field  [Enter] Send  [Tab] Next Page  [Esc] Quit",
    }
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    frame.render_widget(
        Paragraph::new(footer_hint(app)).style(Style::new().fg(theme.fg_dim)),
        area,
    );
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());
    let key = |k: &'static str| Span::styled(format!("{k:<14}"), Style::new().fg(theme.accent));
    let desc = |d: &'static str| Span::styled(d, Style::new().fg(theme.fg));

    let text = vec![
        Line::from(Span::styled(
            "Navigation",
            Style::new().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![key("Tab / S-Tab"), desc("Next / previous page")]),
        Line::from(vec![key("1-6"), desc("Jump to page")]),
        Line::from(vec![key("t"), desc("Cycle theme")]),
        Line::from(vec![key("q / Esc"), desc("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Carousel",
            Style::new().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![key("← / h"), desc("Previous slide")]),
        Line::from(vec![key("→ / l"), desc("Next slide")]),
        Line::from(vec![key("Click"), desc("Left slide rewinds, any other advances")]),
        Line::from(Span::styled(
            "Any interaction stops the automatic slideshow.",
            Style::new().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Career Predictor",
            Style::new().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![key("↑ / ↓"), desc("Select field")]),
        Line::from(vec![key("← / →"), desc("Adjust value")]),
        Line::from(vec![key("Enter"), desc("Get prediction")]),
        Line::from(vec![key("Ctrl+r"), desc("Reset form")]),
        Line::from(vec![key("Ctrl+s"), desc("Save report")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::new().fg(theme.fg_dim),
        )),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(" Help ")
                .style(Style::new().bg(theme.bg))
                .border_style(Style::new().fg(theme.accent)),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
