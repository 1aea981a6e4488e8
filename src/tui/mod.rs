use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::config::Config;
use crate::metrics::{self, DataPoint};
use crate::relativity::KinematicFactors;
use crate::scheduler::FrameScheduler;
use crate::simulation::Simulation;

type Backend = CrosstermBackend<Stdout>;
type Lab = Simulation<FrameScheduler>;

/// Input poll timeout while the clock is idle.
const IDLE_POLL: Duration = Duration::from_millis(200);

pub fn start(config: &Config, export: bool) -> anyhow::Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);

    crossterm::terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let log = result?;
    if export {
        metrics::export_csv(Path::new("realtime.csv"), &log)?;
        if !log.is_empty() {
            metrics::plot_results(Path::new("realtime.png"), &log)?;
        }
        println!("Session data exported to realtime.csv");
    }
    Ok(())
}

fn run(terminal: &mut Terminal<Backend>, config: &Config) -> anyhow::Result<Vec<DataPoint>> {
    let mut lab = Simulation::new(config.scale, FrameScheduler::new(config.frame_interval));
    let mut log: Vec<DataPoint> = Vec::new();

    loop {
        if let Some(now) = lab.scheduler_mut().poll(Instant::now()) {
            lab.tick(now);
        }

        terminal
            .draw(|f| draw(f, &lab, config))
            .context("drawing frame")?;

        let timeout = lab
            .clock()
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        // Input handling
        if !event::poll(timeout)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Right => {
                lab.nudge(config.step);
                log.push(snapshot(&lab, config));
            }
            KeyCode::Left => {
                lab.nudge(-config.step);
                log.push(snapshot(&lab, config));
            }
            KeyCode::Char('m') => {
                lab.toggle_scale_mode();
                log.push(snapshot(&lab, config));
            }
            KeyCode::Char(' ') => lab.toggle_running(),
            KeyCode::Char('r') => lab.reset(),
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    // Leaving the loop drops the lab, which releases any armed tick.
    Ok(log)
}

fn draw(f: &mut Frame, lab: &Lab, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let k = lab.kinematic_factors();

    let velocity = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Velocity ({} scale) ", lab.scale_mode().as_str()))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(lab.control_input())
        .label(format!(
            "{:.4}c  ({:.0} km/s)",
            lab.velocity(),
            KinematicFactors::speed_mps(lab.velocity()) / 1000.0
        ));
    f.render_widget(velocity, chunks[0]);

    let gamma = Paragraph::new(format!(
        "γ = {:.4}   length × {:.4}   time × {:.4}",
        k.gamma, k.length_contraction, k.time_dilation
    ))
    .block(Block::default().title(" Lorentz factor ").borders(Borders::ALL));
    f.render_widget(gamma, chunks[1]);

    let rest_ruler = Gauge::default()
        .block(Block::default().title(" Ruler at rest ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(1.0)
        .label(format!("{:.2} m", config.proper_length));
    f.render_widget(rest_ruler, chunks[2]);

    let moving_ruler = Gauge::default()
        .block(Block::default().title(" Ruler in motion ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(k.length_contraction.clamp(0.0, 1.0))
        .label(format!("{:.2} m", lab.contracted_length(config.proper_length)));
    f.render_widget(moving_ruler, chunks[3]);

    let clocks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);
    let state = if lab.is_running() { "running" } else { "paused" };
    let stationary = Paragraph::new(format_stopwatch(lab.elapsed_stationary_seconds())).block(
        Block::default()
            .title(format!(" Stationary observer ({state}) "))
            .borders(Borders::ALL),
    );
    let moving = Paragraph::new(format_stopwatch(lab.moving_observer_seconds()))
        .block(Block::default().title(" Moving observer ").borders(Borders::ALL));
    f.render_widget(stationary, clocks[0]);
    f.render_widget(moving, clocks[1]);

    let help = Paragraph::new("←/→ velocity   m scale   space start/pause   r reset   q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);
}

fn snapshot(lab: &Lab, config: &Config) -> DataPoint {
    DataPoint::at(
        lab.control_input(),
        lab.scale_mode(),
        config.proper_time,
        config.proper_length,
    )
}

/// `mm:ss.cc`
fn format_stopwatch(seconds: f64) -> String {
    let centis = (seconds.max(0.0) * 100.0).floor() as u64;
    let minutes = centis / 6000;
    let secs = (centis / 100) % 60;
    format!("{:02}:{:02}.{:02}", minutes, secs, centis % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stopwatch() {
        assert_eq!(format_stopwatch(0.0), "00:00.00");
        assert_eq!(format_stopwatch(8.0), "00:08.00");
        assert_eq!(format_stopwatch(61.257), "01:01.25");
        assert_eq!(format_stopwatch(-1.0), "00:00.00");
    }
}
