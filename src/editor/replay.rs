use std::path::PathBuf;

use super::EditorSession;
use crate::input::{ReplayScript, StepAction};
use crate::storage::{DrawingStorage, StorageResult};

/// Outcome of replaying a recorded script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: usize,
    pub rejected_controls: usize,
    pub rejected_pointer_events: usize,
    pub saved: Vec<PathBuf>,
}

/// Feeds every step of `script` into `session`.
///
/// Rejected control values and out-of-order pointer events leave the session
/// untouched and are counted; storage failures abort the replay.
pub fn replay<S: DrawingStorage>(
    script: &ReplayScript,
    session: &mut EditorSession,
    storage: &S,
    default_file_name: &str,
) -> StorageResult<ReplayReport> {
    let mut report = ReplayReport::default();

    for (index, step) in script.steps.iter().enumerate() {
        report.steps += 1;
        match step.action() {
            StepAction::Pointer(event) => {
                if let Err(err) = session.handle_pointer(event) {
                    tracing::warn!(step = index, ?event, error = %err, "pointer event rejected");
                    report.rejected_pointer_events += 1;
                }
            }
            StepAction::Control(Ok(change)) => session.apply(change),
            StepAction::Control(Err(err)) => {
                tracing::warn!(step = index, error = %err, "control value rejected");
                report.rejected_controls += 1;
            }
            StepAction::Clear => session.clear(),
            StepAction::Save(file_name) => {
                let file_name = file_name.as_deref().unwrap_or(default_file_name);
                let path = session.save(storage, file_name)?;
                report.saved.push(path);
            }
        }
    }

    tracing::debug!(
        steps = report.steps,
        rejected_controls = report.rejected_controls,
        rejected_pointer_events = report.rejected_pointer_events,
        "replay finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewPolicy;
    use crate::editor::{BrushSettings, SessionOptions, ToolMode};
    use crate::geometry::{Color, Rgba};
    use crate::input::parse_script;
    use crate::storage::StorageError;
    use crate::surface::RasterSurface;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        images: RefCell<Vec<(String, RasterSurface)>>,
    }

    impl DrawingStorage for MemoryStorage {
        fn save_drawing(
            &self,
            surface: &RasterSurface,
            file_name: &str,
        ) -> StorageResult<PathBuf> {
            if file_name.trim().is_empty() {
                return Err(StorageError::EmptyFileName);
            }
            self.images
                .borrow_mut()
                .push((file_name.to_string(), surface.clone()));
            Ok(PathBuf::from(file_name))
        }
    }

    fn session() -> EditorSession {
        EditorSession::new(
            40,
            40,
            SessionOptions {
                preview_policy: PreviewPolicy::Overlay,
                brush: BrushSettings::new(Color::BLACK, 1, 1.0),
            },
        )
    }

    #[test]
    fn replay_draws_and_saves_with_default_name() {
        let script = parse_script(
            r##"{ "steps": [
                { "type": "color", "value": "#ff0000" },
                { "type": "down", "x": 0, "y": 0 },
                { "type": "move", "x": 9, "y": 0 },
                { "type": "up", "x": 9, "y": 0 },
                { "type": "save" }
            ] }"##,
        )
        .unwrap();
        let storage = MemoryStorage::default();
        let mut session = session();

        let report = replay(&script, &mut session, &storage, "out.png").unwrap();

        assert_eq!(report.steps, 5);
        assert_eq!(report.saved, vec![PathBuf::from("out.png")]);
        let images = storage.images.borrow();
        assert_eq!(images[0].1.count_pixels(Rgba::new(255, 0, 0, 255)), 10);
    }

    #[test]
    fn rejected_controls_and_pointer_events_are_counted_not_fatal() {
        let script = parse_script(
            r#"{ "steps": [
                { "type": "width", "value": "0" },
                { "type": "color", "value": "purple" },
                { "type": "tool", "value": "fill" },
                { "type": "shape", "value": "square" },
                { "type": "down", "x": 5, "y": 5 },
                { "type": "down", "x": 6, "y": 6 },
                { "type": "up", "x": 10, "y": 10 }
            ] }"#,
        )
        .unwrap();
        let storage = MemoryStorage::default();
        let mut session = session();

        let report = replay(&script, &mut session, &storage, "out.png").unwrap();

        assert_eq!(report.rejected_controls, 2);
        assert_eq!(report.rejected_pointer_events, 1);
        assert_eq!(session.brush().width(), 1);
        assert_eq!(session.mode(), ToolMode::Fill);
        assert_eq!(
            session.surface().pixel(10, 10),
            Some(Rgba::new(0, 0, 0, 255)),
            "square committed at release"
        );
    }

    #[test]
    fn clear_step_and_named_save() {
        let script = parse_script(
            r#"{ "steps": [
                { "type": "down", "x": 3, "y": 3 },
                { "type": "up", "x": 3, "y": 3 },
                { "type": "clear" },
                { "type": "save", "file_name": "blank.png" }
            ] }"#,
        )
        .unwrap();
        let storage = MemoryStorage::default();
        let mut session = session();

        let report = replay(&script, &mut session, &storage, "out.png").unwrap();

        assert_eq!(report.saved, vec![PathBuf::from("blank.png")]);
        assert!(storage.images.borrow()[0].1.is_blank());
    }

    #[test]
    fn storage_failure_aborts_replay() {
        let script = parse_script(
            r#"{ "steps": [
                { "type": "save", "file_name": " " },
                { "type": "down", "x": 3, "y": 3 }
            ] }"#,
        )
        .unwrap();
        let storage = MemoryStorage::default();
        let mut session = session();

        let err = replay(&script, &mut session, &storage, "out.png").unwrap_err();
        assert!(matches!(err, StorageError::EmptyFileName));
        assert!(session.surface().is_blank());
    }
}
