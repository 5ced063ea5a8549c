#![forbid(unsafe_code)]

//! Interactive terminal loop.
//!
//! Drives a panel from keyboard input: gestures become partial updates in
//! the [`UpdateQueue`], the queue drains into `set` between passes, and the
//! attached [`TextPanel`] repaints the rows the invalidation pass reported.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use dialkit::prelude::controls::{button, buttons, group, number, pad2, range, select, toggle};
use dialkit::{Panel, TextPanel, Update, UpdateQueue};

pub struct App {
    panel: Panel,
    view: Rc<RefCell<TextPanel>>,
    queue: UpdateQueue,
    cursor: usize,
    last_dirty: usize,
    rng: u64,
}

impl App {
    pub fn new(mut panel: Panel) -> Self {
        let view = Rc::new(RefCell::new(TextPanel::new()));
        let sink = Rc::clone(&view);
        panel.attach_renderer(move |pass| sink.borrow_mut().apply(pass));
        Self {
            panel,
            view,
            queue: UpdateQueue::new(),
            cursor: 0,
            last_dirty: 0,
            rng: 0x2545_f491_4f6c_dd1d,
        }
    }

    /// Run `frames` synthetic monitor updates and print the final panel.
    pub fn run_script(mut self, frames: u64) -> io::Result<()> {
        let mut invalidated = 0;
        for _ in 0..frames {
            let sample = self.next_sample();
            if let Ok(dirty) = self.panel.set(&Update::new().value("monitor", sample)) {
                invalidated += dirty.len();
            }
        }

        let mut stdout = io::stdout();
        for line in self.view.borrow().lines() {
            writeln!(stdout, "{line}")?;
        }
        writeln!(stdout, "-- {frames} frames, {invalidated} nodes invalidated")?;
        Ok(())
    }

    /// Run the interactive loop until `q` or Ctrl+C.
    pub fn run_interactive(mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let result = self.event_loop(&mut stdout);

        execute!(stdout, LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self, stdout: &mut io::Stdout) -> io::Result<()> {
        self.draw(stdout)?;
        loop {
            // Tick the monitor between key events, like a host animation loop.
            if !event::poll(Duration::from_millis(100))? {
                let sample = self.next_sample();
                self.queue.push(Update::new().value("monitor", sample));
                self.pump();
                self.draw(stdout)?;
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || key.code == KeyCode::Char('q') {
                    return Ok(());
                }
                self.handle_key(key.code);
                self.pump();
                self.draw(stdout)?;
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let row_count = self.view.borrow().rows().len();
        match code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < row_count {
                    self.cursor += 1;
                }
            }
            KeyCode::Left => self.gesture(-1.0),
            KeyCode::Right => self.gesture(1.0),
            KeyCode::Enter => self.activate(),
            _ => {}
        }
    }

    /// Focused node id and control type, from the cursor row.
    fn focused(&self) -> Option<(String, String)> {
        let view = self.view.borrow();
        let row = view.rows().get(self.cursor)?;
        let node = self.panel.root().find(&row.id)?;
        Some((row.id.clone(), node.control().to_owned()))
    }

    fn gesture(&mut self, direction: f64) {
        let Some((id, control)) = self.focused() else {
            return;
        };
        let Some(state) = self.panel.state(&id) else {
            return;
        };
        let update = match control.as_str() {
            range::NAME => Some(range::nudge(&id, state, direction)),
            number::NAME => Some(number::nudge(&id, state, direction)),
            toggle::NAME => Some(toggle::flip(&id, state)),
            select::NAME => select::cycle(&id, state, direction as i64),
            buttons::NAME => buttons::cycle(&id, state, direction as i64),
            pad2::NAME => Some(pad2::nudge(&id, state, direction * 0.1, 0.0)),
            _ => None,
        };
        if let Some(update) = update {
            self.queue.push(update);
        }
    }

    fn activate(&mut self) {
        let Some((id, control)) = self.focused() else {
            return;
        };
        let Some(state) = self.panel.state(&id) else {
            return;
        };
        let update = match control.as_str() {
            group::NAME => group::toggle_expanded(&id, state),
            button::NAME => Some(button::press(&id, state)),
            toggle::NAME => Some(toggle::flip(&id, state)),
            _ => None,
        };
        if let Some(update) = update {
            self.queue.push(update);
        }
    }

    /// Drain queued gestures into the panel.
    fn pump(&mut self) {
        let mut dirty = 0;
        let batches: Vec<Update> = self.queue.drain().collect();
        for update in batches {
            if let Ok(set) = self.panel.set(&update) {
                dirty += set.len();
            }
        }
        self.last_dirty = dirty;
    }

    fn draw(&mut self, stdout: &mut io::Stdout) -> io::Result<()> {
        let view = self.view.borrow();
        let lines = view.lines();
        if self.cursor >= lines.len() && !lines.is_empty() {
            self.cursor = lines.len() - 1;
        }

        queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        for (i, line) in lines.iter().enumerate() {
            queue!(stdout, MoveTo(0, i as u16))?;
            if i == self.cursor {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(line),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(stdout, Print(line))?;
            }
        }
        queue!(
            stdout,
            MoveTo(0, lines.len() as u16 + 1),
            Print(format!(
                "↑↓ move · ←→ adjust · enter toggle/press · q quit · last pass: {} node(s)",
                self.last_dirty
            ))
        )?;
        stdout.flush()
    }

    /// xorshift sample in [0, 1) for the monitor control.
    fn next_sample(&mut self) -> f64 {
        self.rng ^= self.rng << 13;
        self.rng ^= self.rng >> 7;
        self.rng ^= self.rng << 17;
        (self.rng >> 11) as f64 / (1u64 << 53) as f64
    }
}
