//! `acejump <kind>`: run one session over files loaded as panes.
//!
//! Every file becomes a pane of a [`MemoryEditor`], in argument order, and the first is
//! active. `--keys` is fed to the prompt one key at a time. Each labeled batch is
//! printed as it appears, followed by where the cursor landed.

use crate::cli::JumpArgs;
use acejump::{
    memory::MemoryEditor, parse_keys, Editor, Jump, JumpEngine, JumpKind, Key, Mode, Pane,
    PaneId, PromptAction, Scope, Selection,
};
use acejump_config::Config;
use anyhow::{Context, Result};
use std::{io::Write, path::Path};

struct Panes {
    editor: MemoryEditor,
    names: Vec<(PaneId, String)>,
}

impl Panes {
    fn load(files: &[impl AsRef<Path>]) -> Result<Self> {
        let mut editor = MemoryEditor::new();
        let mut names = Vec::with_capacity(files.len());
        for file in files {
            let path = file.as_ref();
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let id = editor.add_pane(&text);
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            names.push((id, name));
        }
        Ok(Self { editor, names })
    }

    fn name(&self, id: PaneId) -> &str {
        self.names
            .iter()
            .find(|(pane, _)| *pane == id)
            .map_or("?", |(_, name)| name.as_str())
    }
}

/// Run a jump session and report to `out`. Returns the jump, if any.
pub fn run(
    kind: JumpKind,
    args: &JumpArgs,
    config: Config,
    out: &mut impl Write,
) -> Result<Option<Jump>> {
    let keys = parse_keys(&args.keys).context("Invalid --keys")?;
    let mut panes = Panes::load(&args.files)?;
    let mut engine = JumpEngine::new(config);

    if let (Some(offset), Some(&(first, _))) = (args.cursor, panes.names.first()) {
        if let Some(pane) = panes.editor.pane_mut(first) {
            pane.set_selections(vec![Selection::cursor(offset)]);
        }
    }

    for (enabled, mode) in [
        (args.select, Mode::Select),
        (args.add_cursor, Mode::AddCursor),
        (args.after, Mode::JumpAfter),
    ] {
        if enabled {
            engine.toggle(mode);
        }
    }

    let scope = if args.current_buffer_only {
        Scope::CurrentBuffer
    } else {
        Scope::AllPanes
    };

    let mut prompt = engine
        .invoke(&mut panes.editor, kind, scope)
        .context("Failed to start the jump")?;
    if engine.session().is_some_and(|session| session.head.is_some()) {
        render_batch(&engine, &panes, out)?;
    }

    let mut jump = None;
    let mut open = true;
    for key in keys {
        if !open {
            tracing::warn!("Ignoring {key:?}: the prompt is closed");
            continue;
        }

        let action = match key {
            Key::Char(ch) => {
                prompt.text.push(ch);
                engine.on_change(&mut panes.editor, &prompt.text)
            },
            Key::Backspace => {
                prompt.text.pop();
                engine.on_change(&mut panes.editor, &prompt.text)
            },
            Key::Enter => engine.on_enter(&mut panes.editor),
            Key::Esc => {
                engine.cancel(&mut panes.editor);
                open = false;
                continue;
            },
        };

        match action {
            PromptAction::Keep => {
                if engine.session().is_some_and(|session| session.head.is_some()) {
                    render_batch(&engine, &panes, out)?;
                }
            },
            PromptAction::Reopen(next) => {
                prompt = next;
                render_batch(&engine, &panes, out)?;
            },
            PromptAction::Close => {
                jump = engine.on_close(&mut panes.editor);
                open = false;
            },
        }
    }

    if open {
        tracing::debug!("Keys ran out with the prompt open, closing it");
        jump = engine.on_close(&mut panes.editor);
    }

    report(jump, &panes, out)?;
    Ok(jump)
}

fn render_batch(engine: &JumpEngine, panes: &Panes, out: &mut impl Write) -> Result<()> {
    let Some(session) = engine.session() else {
        return Ok(());
    };

    writeln!(out, "batch: {} labels", session.batch.issued())?;
    for record in session.batch.overlays.iter().filter(|record| !record.is_empty()) {
        writeln!(out, "{}:", panes.name(record.pane))?;
        let text = panes.editor.text(record.pane).unwrap_or_default();
        for line in text.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

fn report(jump: Option<Jump>, panes: &Panes, out: &mut impl Write) -> Result<()> {
    let Some(jump) = jump else {
        writeln!(out, "no jump")?;
        return Ok(());
    };

    let text = panes.editor.text(jump.pane).unwrap_or_default();
    let (line, column) = line_column(&text, jump.cursor);
    writeln!(
        out,
        "jump: {}:{line}:{column} ({})",
        panes.name(jump.pane),
        jump.mode
    )?;

    if let Some(pane) = panes.editor.pane(jump.pane) {
        let selections = pane.selections();
        if selections.len() > 1 || selections.iter().any(|selection| !selection.is_empty()) {
            for selection in selections {
                writeln!(out, "  selection {}..{}", selection.start, selection.end)?;
            }
        }
    }
    Ok(())
}

/// One-based line and column of a character offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
