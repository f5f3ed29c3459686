//! Per-pane state saved at invocation and put back when the session ends.
//!
//! While labels are visible every pane runs with a neutral grammar (so glyphs are not
//! colored as code), with the configured view settings switched off, and with its
//! selections hidden.

use crate::{
    host::{Editor, Pane, PaneId, SettingValue, SYNTAX_SETTING},
    selection::Selection,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSnapshot {
    pub pane: PaneId,
    pub selections: Vec<Selection>,
    syntax: Option<SettingValue>,
    settings: Vec<(String, Option<SettingValue>)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    panes: Vec<PaneSnapshot>,
}

impl Snapshot {
    /// Save selection, grammar and `view_settings` of each pane, in `panes` order.
    pub fn capture<E: Editor>(editor: &E, panes: &[PaneId], view_settings: &[String]) -> Self {
        let panes = panes
            .iter()
            .filter_map(|&id| {
                let Some(pane) = editor.pane(id) else {
                    tracing::warn!("Skipping snapshot of missing {id}");
                    return None;
                };
                Some(PaneSnapshot {
                    pane: id,
                    selections: pane.selections(),
                    syntax: pane.setting(SYNTAX_SETTING),
                    settings: view_settings
                        .iter()
                        .map(|name| (name.clone(), pane.setting(name)))
                        .collect(),
                })
            })
            .collect();

        Self { panes }
    }

    /// Put every captured pane into overlay state.
    pub fn suspend<E: Editor>(&self, editor: &mut E, overlay_syntax: &str) {
        for saved in &self.panes {
            let Some(pane) = editor.pane_mut(saved.pane) else {
                continue;
            };
            pane.set_setting(SYNTAX_SETTING, Some(overlay_syntax.into()));
            for (name, _) in &saved.settings {
                pane.set_setting(name, Some(false.into()));
            }
            pane.set_selections(Vec::new());
        }
    }

    /// Restore grammar and settings everywhere, and selections everywhere except `target`.
    pub fn restore<E: Editor>(&self, editor: &mut E, target: Option<PaneId>) {
        for saved in &self.panes {
            let Some(pane) = editor.pane_mut(saved.pane) else {
                continue;
            };
            pane.set_setting(SYNTAX_SETTING, saved.syntax.clone());
            for (name, value) in &saved.settings {
                pane.set_setting(name, value.clone());
            }
            if target != Some(saved.pane) {
                pane.set_selections(saved.selections.clone());
            }
        }
    }

    pub fn get(&self, pane: PaneId) -> Option<&PaneSnapshot> {
        self.panes.iter().find(|saved| saved.pane == pane)
    }

    pub fn selections(&self, pane: PaneId) -> &[Selection] {
        self.get(pane)
            .map(|saved| saved.selections.as_slice())
            .unwrap_or_default()
    }

    /// Cursor of the pane's first selection at invocation.
    pub fn caret(&self, pane: PaneId) -> usize {
        self.selections(pane)
            .first()
            .map_or(0, Selection::cursor_position)
    }
}
