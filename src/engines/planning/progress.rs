use crate::types::{RunSummary, Score, TurnReport};
use std::sync::mpsc::Sender;

pub trait ProgressCallback: Send {
    fn on_turn_start(&mut self, turn: usize);
    fn on_turn_complete(&mut self, report: &TurnReport);
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Reports nothing. The engine's default.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_turn_start(&mut self, _turn: usize) {}

    fn on_turn_complete(&mut self, _report: &TurnReport) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_turn_start(&mut self, turn: usize) {
        log::trace!("Turn {} planning...", turn + 1);
    }

    fn on_turn_complete(&mut self, report: &TurnReport) {
        log::info!("Best score in evaluations: {:.2}", report.best_score);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        log::info!(
            "Final score: {:.2} after {} turns ({} actions)",
            summary.final_score,
            summary.turns,
            summary.actions_performed
        );
    }
}

// For handing progress to another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    TurnStart(usize),
    TurnComplete { turn: usize, best_score: Score },
    RunComplete { turns: usize, final_score: Score },
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_turn_start(&mut self, turn: usize) {
        let _ = self.sender.send(ProgressMessage::TurnStart(turn));
    }

    fn on_turn_complete(&mut self, report: &TurnReport) {
        let _ = self.sender.send(ProgressMessage::TurnComplete {
            turn: report.turn,
            best_score: report.best_score,
        });
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let _ = self.sender.send(ProgressMessage::RunComplete {
            turns: summary.turns,
            final_score: summary.final_score,
        });
    }
}
