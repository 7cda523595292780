//! Widget rendering: maps view-models onto ratatui widgets.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use blockvote_app::ui::{CandidateCard, Tone, WalletButton};
use blockvote_app::{NoticeLevel, Page};

use crate::run::UiState;

const ACCENT: Color = Color::Cyan;
const DIM: Style = Style::new().fg(Color::DarkGray);

pub fn draw(frame: &mut Frame, page: &Page, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // status + latest notice
            Constraint::Min(8),    // body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    draw_header(frame, page, chunks[0]);
    draw_status(frame, page, chunks[1]);
    if page.connected {
        draw_body(frame, page, state, chunks[2]);
    } else {
        draw_landing(frame, chunks[2]);
    }
    draw_footer(frame, page, state, chunks[3]);
}

fn draw_header(frame: &mut Frame, page: &Page, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "BlockVote",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Decentralized Voting Platform", DIM),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, columns[0]);

    let wallet_line = match &page.wallet {
        WalletButton::Connect { enabled, label } => {
            let style = if *enabled {
                Style::default().fg(ACCENT)
            } else {
                DIM
            };
            Line::from(Span::styled(format!("{label} (c)"), style))
        }
        WalletButton::Connected { short_account } => Line::from(vec![
            Span::styled(short_account.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  disconnect (d)", DIM),
        ]),
    };
    let wallet = Paragraph::new(wallet_line)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Wallet"));
    frame.render_widget(wallet, columns[1]);
}

fn draw_status(frame: &mut Frame, page: &Page, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(area);

    let badge = Paragraph::new(Span::styled(
        page.status.label,
        tone_style(page.status.tone).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Election Status"));
    frame.render_widget(badge, columns[0]);

    let notice_line = match page.notices.first() {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => Style::default().fg(Color::Green),
                NoticeLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(vec![
                Span::styled(format!("{}: ", notice.title), style.add_modifier(Modifier::BOLD)),
                Span::raw(notice.detail.clone()),
            ])
        }
        None => Line::from(Span::styled("—", DIM)),
    };
    let notices = Paragraph::new(notice_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Notices"));
    frame.render_widget(notices, columns[1]);
}

fn draw_landing(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connect Your Wallet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Connect your wallet to participate in the election"),
        Line::from(""),
        Line::from(Span::styled("press c to connect", Style::default().fg(ACCENT))),
    ];
    let landing = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(landing, area);
}

fn draw_body(frame: &mut Frame, page: &Page, state: &UiState, area: Rect) {
    let mut constraints = vec![Constraint::Length(5)]; // admin area
    if page.winner.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(5)); // candidates
    if page.show_onboarding {
        constraints.push(Constraint::Length(7));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;

    draw_admin_area(frame, page, state, chunks[next]);
    next += 1;

    if let Some(winner) = &page.winner {
        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                "★ Election Winner",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} — {} votes", winner.name, winner.vote_count)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[next]);
        next += 1;
    }

    draw_candidates(frame, page, state, chunks[next]);
    next += 1;

    if page.show_onboarding {
        let steps = Paragraph::new(vec![
            Line::from("1. Admin adds candidates"),
            Line::from("2. Admin starts the election"),
            Line::from("3. Voters cast their votes (one per wallet)"),
            Line::from("4. Admin ends the election"),
            Line::from("5. Winner is announced"),
        ])
        .style(DIM)
        .block(Block::default().borders(Borders::ALL).title("How This Works"));
        frame.render_widget(steps, chunks[next]);
    }
}

fn draw_admin_area(frame: &mut Frame, page: &Page, state: &UiState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Admin Controls");

    let lines = match &page.admin_panel {
        Some(panel) => {
            let mut lines = vec![Line::from(Span::styled(
                "Admin mode active — you have full control over the election",
                Style::default().fg(ACCENT),
            ))];

            if let Some(input) = &state.input {
                lines.push(Line::from(vec![
                    Span::raw("New candidate: "),
                    Span::styled(
                        format!("{input}▏"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
            } else {
                let mut controls: Vec<&str> = Vec::new();
                if panel.show_add_candidate {
                    controls.push("add candidate (a)");
                }
                if panel.show_start {
                    controls.push("start election (s)");
                }
                if panel.show_end {
                    controls.push("end election (e)");
                }
                let style = if panel.controls_enabled {
                    Style::default()
                } else {
                    DIM
                };
                let mut line = controls.join("   ");
                if !panel.controls_enabled {
                    line.push_str("   [transaction pending]");
                }
                lines.push(Line::from(Span::styled(line, style)));
            }
            lines
        }
        None => {
            let mut lines = Vec::new();
            if let Some(hint) = &page.admin_hint {
                lines.push(Line::from(hint.clone()));
            }
            lines.push(Line::from(Span::styled(
                "Admin can add candidates, start the election, and end it",
                DIM,
            )));
            lines
        }
    };

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(panel, area);
}

fn draw_candidates(frame: &mut Frame, page: &Page, state: &UiState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(page.heading);

    if page.candidates.is_empty() {
        let (title, hint) = match &page.empty_state {
            Some(empty) => (empty.title, empty.hint),
            None => ("No candidates yet", ""),
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(hint, DIM)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = page.candidates.iter().map(candidate_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn candidate_item(card: &CandidateCard) -> ListItem<'_> {
    let mut spans = vec![
        Span::styled(
            card.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  #{}", card.id), DIM),
        Span::raw(format!("  {} votes", card.vote_count)),
    ];

    if card.is_winner {
        spans.push(Span::styled(
            "  ★ winner",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(control) = &card.vote_control {
        let style = if control.enabled {
            Style::default().fg(ACCENT)
        } else {
            DIM
        };
        spans.push(Span::styled(format!("  [{}]", control.label), style));
    }

    ListItem::new(Line::from(spans))
}

fn draw_footer(frame: &mut Frame, page: &Page, state: &UiState, area: Rect) {
    let hints = if state.input.is_some() {
        "Enter submit · Esc cancel".to_string()
    } else if !page.connected {
        "c connect · q quit".to_string()
    } else {
        let mut hints = "↑/↓ select · v vote · r refresh · d disconnect · q quit".to_string();
        if page.is_admin {
            hints.push_str(" · a/s/e admin");
        }
        hints
    };
    frame.render_widget(Paragraph::new(Span::styled(hints, DIM)), area);
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => Style::default().fg(Color::Gray),
        Tone::Positive => Style::default().fg(Color::Green),
        Tone::Negative => Style::default().fg(Color::Red),
    }
}
