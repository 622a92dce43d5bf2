use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use std::time::Instant;

use cryptoidle::economy::{
    DAILY_COOLDOWN_HOURS, DAILY_REWARDS, EXCHANGE_COST, MINT_COST, next_rank_for,
};
use cryptoidle::games::blackjack::{Card, hand_total};
use cryptoidle::games::{GameKind, RoundPhase};
use cryptoidle::ledger::Transaction;
use cryptoidle::missions::Mission;
use cryptoidle::nft::{Collectible, Rarity};

use crate::app::{App, MarketColumn, PaneFocus, format_countdown};

pub fn draw(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    if app.wallet.is_connected() {
        match app.focus {
            PaneFocus::Dashboard => draw_dashboard(f, chunks[1], app),
            PaneFocus::Arcade => draw_arcade(f, chunks[1], app),
            PaneFocus::Market => draw_market(f, chunks[1], app),
            PaneFocus::Missions => draw_missions(f, chunks[1], app),
            PaneFocus::Profile => draw_profile(f, chunks[1], app),
        }
    } else {
        draw_connect_prompt(f, chunks[1], app);
    }

    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let titles: Vec<Line> = PaneFocus::ALL.iter().map(|p| Line::from(p.title())).collect();
    let selected = PaneFocus::ALL
        .iter()
        .position(|p| *p == app.focus)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("CryptoIdle"))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, columns[0]);

    let economy = &app.economy;
    let mut spans = vec![
        Span::styled(
            format!("{} IGC", economy.igc()),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} res", economy.resources()),
            Style::default().fg(Color::LightCyan),
        ),
        Span::raw("  |  "),
    ];
    match app.wallet.address() {
        Some(address) if app.wallet.is_connected() => {
            spans.push(Span::styled(address.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!("  {} ETH", app.wallet.balance())));
            if app.wallet.is_simulation() {
                spans.push(Span::styled(" (sim)", Style::default().fg(Color::DarkGray)));
            }
        }
        _ if app.wallet.is_connecting() => {
            spans.push(Span::styled("connecting...", Style::default().fg(Color::DarkGray)))
        }
        _ => spans.push(Span::styled("no wallet", Style::default().fg(Color::DarkGray))),
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Wallet"));
    f.render_widget(paragraph, columns[1]);
}

fn draw_connect_prompt(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = pane_block(app.focus.title(), true);
    let text = if app.wallet.is_connecting() {
        "No wallet extension found. Starting a simulated wallet..."
    } else {
        "Connect a wallet to start mining, playing and trading. Press C to connect."
    };
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_dashboard(f: &mut Frame<'_>, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    draw_mining(f, columns[0], app);
    draw_daily(f, right[0], app);
    draw_rank(f, right[1], app);
}

fn draw_mining(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = pane_block("Mining & Staking", app.focus == PaneFocus::Dashboard);
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let segments = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let economy = &app.economy;
    let ratio = (economy.resources() % EXCHANGE_COST) as f64 / EXCHANGE_COST as f64;
    let gauge = Gauge::default()
        .block(Block::default().title("Next exchange"))
        .ratio(if economy.resources() >= EXCHANGE_COST { 1.0 } else { ratio })
        .gauge_style(
            Style::default()
                .fg(Color::Green)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("{} / {}", economy.resources().min(EXCHANGE_COST), EXCHANGE_COST));
    f.render_widget(gauge, segments[0]);

    let lines = vec![
        Line::from(vec![
            Span::styled("Boost ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}x", economy.mining_boost()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  |  Mined "),
            Span::raw(economy.total_mined().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Staked ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} IGC", economy.staked_igc()),
                Style::default().fg(Color::LightGreen),
            ),
            Span::raw("  |  Stake amount "),
            Span::styled(
                format!("{} IGC", app.stake_amount),
                Style::default().fg(Color::LightCyan),
            ),
        ]),
        Line::from(""),
        Line::from("Space/M mine  |  E exchange 100 res for 1 IGC"),
        Line::from("↑↓ stake amount  A all  S stake  U unstake all"),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(paragraph, segments[1]);
}

fn draw_daily(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title("Daily Reward")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let economy = &app.economy;
    let streak = economy.daily_streak() as usize;

    let mut days = Vec::new();
    for (idx, reward) in DAILY_REWARDS.iter().enumerate() {
        let style = if idx < streak {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        days.push(Span::styled(format!("D{}:{} ", idx + 1, reward), style));
    }

    let status = if economy.can_claim_daily() {
        Span::styled(
            format!("Day {} ready, press D", economy.next_daily_day()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        let next = economy
            .last_daily_claim()
            .map(|t| (t + chrono::Duration::hours(DAILY_COOLDOWN_HOURS)).with_timezone(&chrono::Local))
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();
        Span::styled(format!("Claimed, next at {}", next), Style::default().fg(Color::Gray))
    };

    let paragraph = Paragraph::new(vec![Line::from(days), Line::from(""), Line::from(status)])
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_rank(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title("Rank")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let segments = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let igc = app.economy.igc();
    let rank = app.economy.rank();
    let title = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", rank.icon)),
        Span::styled(
            rank.name,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, segments[0]);

    let (ratio, label) = match next_rank_for(igc) {
        Some(next) => {
            let span = (next.min_igc - rank.min_igc).max(1);
            let ratio = (igc - rank.min_igc) as f64 / span as f64;
            (ratio.clamp(0.0, 1.0), format!("{} / {} to {}", igc, next.min_igc, next.name))
        }
        None => (1.0, "Top rank".to_string()),
    };
    let gauge = Gauge::default()
        .ratio(ratio)
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .label(label);
    f.render_widget(gauge, segments[1]);
}

fn draw_arcade(f: &mut Frame<'_>, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let block = pane_block("Arcade", app.focus == PaneFocus::Arcade);
    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .map(|kind| {
            let marker = match app.arcade.phase(*kind) {
                RoundPhase::Resolving => " ●",
                _ => "",
            };
            ListItem::new(Line::from(format!("{}{}", kind.name(), marker)))
        })
        .collect();
    let selected = GameKind::ALL
        .iter()
        .position(|k| *k == app.arcade.selected)
        .unwrap_or(0);
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, columns[0], &mut state);

    let kind = app.arcade.selected;
    let block = Block::default()
        .title(kind.name())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let mut lines = Vec::new();
    if kind.takes_bet() {
        lines.push(Line::from(vec![
            Span::styled("Bet ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} IGC", app.arcade.bet),
                Style::default().fg(Color::LightGreen),
            ),
            Span::raw("  (↑↓ adjust)"),
        ]));
    }
    lines.extend(game_lines(app, kind));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, columns[1]);
}

fn game_lines(app: &App, kind: GameKind) -> Vec<Line<'static>> {
    let arcade = &app.arcade;
    let now = Instant::now();
    let mut lines = Vec::new();
    let phase = arcade.phase(kind);

    if phase == RoundPhase::Resolving {
        if let Some(due) = app.reveal_due(kind) {
            let left = due.saturating_duration_since(now);
            lines.push(Line::from(Span::styled(
                format!("Revealing in {:.1}s...", left.as_secs_f64()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    match kind {
        GameKind::CoinFlip => {
            lines.push(Line::from(format!("Call: {}  (H heads, T tails)", arcade.coin_call.label())));
            lines.push(Line::from("Correct call pays 2x. Enter to flip."));
            if let Some(o) = arcade.coin_flip.last_outcome() {
                lines.push(Line::from(""));
                lines.push(outcome_line(
                    format!("Last: called {}, landed {}", o.call.label(), o.landed.label()),
                    o.payout,
                ));
            }
        }
        GameKind::DiceRoll => {
            lines.push(Line::from(format!("Guess: {}  (L low 2-6, H high 7-12)", arcade.dice_guess.label())));
            lines.push(Line::from("Correct guess pays 2x. Enter to roll."));
            if let Some(o) = arcade.dice.last_outcome() {
                lines.push(Line::from(""));
                lines.push(outcome_line(
                    format!("Last: {} + {} = {}", o.dice.0, o.dice.1, o.total()),
                    o.payout,
                ));
            }
        }
        GameKind::SpinWheel => {
            lines.push(Line::from("Each spin costs 5 IGC. Enter to spin."));
            if let Some(o) = arcade.wheel.last_outcome() {
                lines.push(Line::from(""));
                lines.push(outcome_line(format!("Last: segment {}", o.segment + 1), o.prize));
            }
        }
        GameKind::Blackjack => {
            let bj = &arcade.blackjack;
            let dealer = if bj.dealer_revealed() {
                format!("{} ({})", hand_label(bj.dealer_hand()), hand_total(bj.dealer_hand()))
            } else {
                bj.dealer_hand()
                    .first()
                    .map(|c| format!("{} ??", c.label()))
                    .unwrap_or_default()
            };
            lines.push(Line::from(format!("Dealer: {}", dealer)));
            lines.push(Line::from(format!(
                "You:    {} ({})",
                hand_label(bj.player_hand()),
                hand_total(bj.player_hand())
            )));
            lines.push(Line::from(""));
            if phase == RoundPhase::Resolving {
                lines.push(Line::from("H hit  S stand"));
            } else {
                lines.push(Line::from("Enter to deal. Blackjack pays 2.5x."));
            }
            if let Some(o) = bj.last_outcome() {
                lines.push(outcome_line(o.result.message().to_string(), o.payout));
            }
        }
        GameKind::ClickerBlitz => {
            let clicker = &arcade.clicker;
            if phase == RoundPhase::Resolving {
                let left = clicker.time_left(now).as_secs();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} clicks", clicker.clicks()),
                        Style::default().fg(Color::LightCyan),
                    ),
                    Span::raw(format!("  {} left", format_countdown(left))),
                ]));
                lines.push(Line::from("Space to click!"));
            } else {
                lines.push(Line::from("5 IGC entry, 30 seconds. Enter to start."));
                lines.push(Line::from("30+ OK 5 | 50+ GOOD 10 | 75+ PRO 15 | 100+ EXPERT 25 | 150+ MASTER 50"));
            }
            lines.push(Line::from(format!("High score: {}", clicker.high_score())));
            if let Some(r) = clicker.last_result() {
                lines.push(outcome_line(
                    format!("Last: {} clicks, {}", r.clicks, r.tier.label()),
                    r.reward,
                ));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc abandons the round in play",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn outcome_line(text: String, payout: u64) -> Line<'static> {
    let (suffix, color) = if payout > 0 {
        (format!("  +{} IGC", payout), Color::LightGreen)
    } else {
        ("  no payout".to_string(), Color::Red)
    };
    Line::from(vec![Span::raw(text), Span::styled(suffix, Style::default().fg(color))])
}

fn hand_label(hand: &[Card]) -> String {
    hand.iter().map(Card::label).collect::<Vec<_>>().join(" ")
}

fn draw_market(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = pane_block("Market", app.focus == PaneFocus::Market);
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_collectibles(
        f,
        columns[0],
        "Marketplace",
        app.economy.catalog(),
        app.market.selected_catalog,
        app.market.column == MarketColumn::Catalog,
    );
    draw_collectibles(
        f,
        columns[1],
        "My Collection",
        app.economy.collection(),
        app.market.selected_owned,
        app.market.column == MarketColumn::Collection,
    );

    let help = Paragraph::new(Line::from(format!(
        "←→ column  ↑↓ select  B buy  N mint ({} IGC)  L list at {} IGC  +/- price",
        MINT_COST, app.market.list_price
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(help, rows[1]);
}

fn draw_collectibles(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: &[Collectible],
    selected: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

    if items.is_empty() {
        let paragraph = Paragraph::new("Nothing here yet. Mint or buy a collectible.")
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let list_items: Vec<ListItem> = items.iter().map(build_collectible_item).collect();
    let list = List::new(list_items).block(block).highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    if focused {
        state.select(Some(selected.min(items.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn build_collectible_item(item: &Collectible) -> ListItem<'static> {
    let price = match (item.for_sale, item.price) {
        (true, Some(price)) => format!("  {} IGC", price),
        _ => String::new(),
    };
    ListItem::new(Line::from(vec![
        Span::styled(item.name.clone(), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(item.rarity.label(), Style::default().fg(rarity_color(item.rarity))),
        Span::styled(price, Style::default().fg(Color::LightGreen)),
    ]))
}

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::LightBlue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

fn draw_missions(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = pane_block("Missions", app.focus == PaneFocus::Missions);
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let segments = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let missions = app.economy.missions();
    let items: Vec<ListItem> = missions.iter().map(build_mission_item).collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    state.select(Some(app.selected_mission));
    f.render_stateful_widget(list, segments[0], &mut state);

    if let Some(mission) = missions.get(app.selected_mission) {
        let gauge = Gauge::default()
            .block(Block::default().title(format!("{} (Enter to claim)", mission.title)))
            .ratio(mission.ratio())
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .label(format!("{} / {}", mission.progress(), mission.target));
        f.render_widget(gauge, segments[1]);
    }
}

fn build_mission_item(mission: &Mission) -> ListItem<'static> {
    let (status, color) = if mission.is_claimed() {
        ("claimed", Color::DarkGray)
    } else if mission.is_completed() {
        ("ready", Color::LightGreen)
    } else {
        ("open", Color::Gray)
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<8}", format!("{:?}", mission.kind)), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:<16}", mission.title), Style::default().fg(Color::White)),
        Span::raw(format!("{:<28}", mission.description)),
        Span::styled(
            format!("+{} {}  ", mission.reward, mission.reward_currency.symbol()),
            Style::default().fg(Color::LightCyan),
        ),
        Span::styled(status, Style::default().fg(color)),
    ]))
}

fn draw_profile(f: &mut Frame<'_>, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(columns[0]);

    let economy = &app.economy;
    let uptime = app.started_at.elapsed().as_secs();
    let stats = vec![
        Line::from(format!("Rank          {} {}", economy.rank().icon, economy.rank().name)),
        Line::from(format!("Games played  {}", economy.games_played())),
        Line::from(format!("Games won     {}  ({}%)", economy.games_won(), economy.win_rate())),
        Line::from(format!("Trades        {}", economy.trades())),
        Line::from(format!("Collectibles  {}", economy.collection().len())),
        Line::from(format!("Session       {}", format_countdown(uptime))),
    ];
    let paragraph = Paragraph::new(stats).block(pane_block("Profile", app.focus == PaneFocus::Profile));
    f.render_widget(paragraph, left[0]);

    let counters = economy.counters();
    let items: Vec<ListItem> = economy
        .achievements()
        .iter()
        .map(|a| {
            let style = if a.is_unlocked() {
                Style::default().fg(Color::LightGreen)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", a.icon)),
                Span::styled(format!("{:<16}", a.name), style),
                Span::raw(format!("{}/{}", a.progress(&counters), a.requirement)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Achievements")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, left[1]);

    draw_ledger(f, columns[1], app);
}

fn draw_ledger(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title("Transactions")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let ledger = app.economy.ledger();
    if ledger.is_empty() {
        let paragraph =
            Paragraph::new("No transactions yet.").wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let items: Vec<ListItem> = ledger
        .iter()
        .skip(app.ledger_scroll.min(ledger.len()))
        .take(visible_height)
        .map(build_ledger_item)
        .collect();
    f.render_widget(List::new(items), inner);
}

fn build_ledger_item(tx: &Transaction) -> ListItem<'static> {
    let timestamp = tx.timestamp_local().format("%H:%M:%S");
    let (sign, color) = if tx.kind.is_credit() {
        ("+", Color::LightGreen)
    } else {
        ("-", Color::Red)
    };
    let line = Line::from(vec![
        Span::styled(timestamp.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(format!("{:<8}", tx.kind.label()), Style::default().fg(Color::LightCyan)),
        Span::styled(
            format!("{}{} {}", sign, tx.amount, tx.currency.symbol()),
            Style::default().fg(color),
        ),
        Span::raw("  "),
        Span::styled(tx.description.clone(), Style::default().fg(Color::White)),
    ]);
    ListItem::new(vec![line])
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Keys & Feed")
        .border_style(Style::default().fg(Color::Gray));
    f.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let pane_hint = match app.focus {
        PaneFocus::Dashboard => "Space mine  E exchange  S stake  U unstake  D daily",
        PaneFocus::Arcade => "←→ game  ↑↓ bet  Enter play  Esc abandon",
        PaneFocus::Market => "B buy  N mint  L list  +/- price",
        PaneFocus::Missions => "↑↓ select  Enter claim",
        PaneFocus::Profile => "↑↓ scroll transactions",
    };
    let instruction_lines = vec![
        Line::from("Tab/Shift+Tab switch pane | Q quit"),
        Line::from("C connect wallet | X disconnect"),
        Line::from(pane_hint),
    ];
    let instruction = Paragraph::new(instruction_lines).wrap(Wrap { trim: true });
    f.render_widget(instruction, columns[0]);

    let mut message_lines: Vec<Line> = Vec::new();
    for msg in app.messages.iter() {
        message_lines.push(Line::from(Span::raw(msg.clone())));
    }
    if message_lines.is_empty() {
        message_lines.push(Line::from(Span::styled(
            "Welcome to CryptoIdle.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let feed = Paragraph::new(message_lines).wrap(Wrap { trim: true });
    f.render_widget(feed, columns[1]);
}

fn pane_block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .borders(Borders::ALL)
        .border_style(border_style)
}
