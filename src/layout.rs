use log::debug;
use serde::Serialize;

use crate::graph::SignalId;
use crate::view::GraphViewState;

/// Zoom applied when the camera centers on a clicked node.
pub const FOCUS_ZOOM: f64 = 1.5;

/// Force-simulation parameters handed to the layout collaborator. Fixed for
/// the life of the view; the collaborator owns node positions, this side only
/// reads them back through [`LayoutSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsProfile {
    pub gravitational_constant: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
    pub damping: f64,
    pub avoid_overlap: f64,
    pub stabilization_iterations: u32,
    pub stabilization_update_interval: u32,
    pub fit_after_stabilize: bool,
    pub random_seed: u64,
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Self {
            gravitational_constant: -2000.0,
            central_gravity: 0.3,
            spring_length: 95.0,
            spring_constant: 0.04,
            damping: 0.09,
            avoid_overlap: 0.0,
            stabilization_iterations: 1000,
            stabilization_update_interval: 100,
            fit_after_stabilize: true,
            random_seed: 42,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// Interaction events reported back by the layout collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutEvent {
    NodeClick { id: SignalId },
    NodeHover { id: Option<SignalId> },
    Stabilized,
}

/// Fire-and-forget camera request emitted in response to a click.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraCommand {
    pub center_on: LayoutPoint,
    pub zoom_level: f64,
}

/// Read-only window onto the coordinates the layout collaborator owns.
pub trait LayoutSurface {
    fn node_position(&self, id: &SignalId) -> Option<LayoutPoint>;
}

/// Routes a layout event into the view state. A click on a visible node
/// selects it and asks the camera to center there; clicks the state rejects
/// produce no camera motion.
pub fn react(
    state: &mut GraphViewState,
    surface: &dyn LayoutSurface,
    event: LayoutEvent,
) -> Option<CameraCommand> {
    match event {
        LayoutEvent::NodeClick { id } => {
            if !state.select_node(&id) {
                return None;
            }
            surface.node_position(&id).map(|position| CameraCommand {
                center_on: position,
                zoom_level: FOCUS_ZOOM,
            })
        }
        LayoutEvent::NodeHover { id } => {
            state.on_hover(id.as_ref());
            None
        }
        LayoutEvent::Stabilized => {
            debug!("layout stabilization complete");
            None
        }
    }
}
