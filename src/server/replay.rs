use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::{
    components::{FlightConfig, PlaneState, PressedKeys},
    server::structures::{Frame, FrameReport},
    systems::{map_input, project_points_from_transform, step, visual_transform},
    utils::ReplayError,
};

/// Drive one aircraft from a JSON-lines frame script, writing a JSON-lines report.
///
/// Blank lines are skipped. Returns the final state after the last frame.
pub fn run_replay<R: BufRead, W: Write>(
    config: &FlightConfig,
    script: R,
    mut out: W,
) -> Result<PlaneState, ReplayError> {
    let mut state = PlaneState::initial(config);
    let mut frame = 0;

    for (index, line) in script.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let input: Frame = serde_json::from_str(&line).map_err(|source| ReplayError::Frame {
            line: index + 1,
            source,
        })?;
        let keys: PressedKeys = input.keys.iter().copied().collect();

        let intent = map_input(&keys, &state, input.delta, config);
        let result = step(&state, &intent, input.delta, config);
        state = result.next_state;

        if let Some(edge) = result.transition {
            debug!("Frame {}: {:?}", frame, edge);
        }

        let report = FrameReport {
            frame,
            state,
            emission: project_points_from_transform(&visual_transform(&state)),
            transition: result.transition,
        };
        serde_json::to_writer(&mut out, &report).map_err(ReplayError::Encode)?;
        writeln!(out)?;
        frame += 1;
    }

    out.flush()?;
    info!("Replayed {} frames", frame);
    Ok(state)
}
