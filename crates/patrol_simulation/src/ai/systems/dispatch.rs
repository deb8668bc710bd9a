//! Command dispatcher: PatrolCommandEvent → data store актора
//!
//! Единственное место, которое пишет CommandRequest / PatrolResumeData.

use bevy::prelude::*;

use crate::ai::events::{CommandIntent, CommandKind, PatrolCommandEvent};
use crate::components::{CommandRequest, CommandStatus, CommandType, PatrolResumeData};

/// Система: применение intent'ов патрульных
///
/// Порядок событий сохраняется (Clear → AttackTarget при ретаргете).
pub fn dispatch_command_intents(
    mut commands: Commands,
    mut command_events: EventReader<PatrolCommandEvent>,
) {
    for event in command_events.read() {
        // Патрульный мог быть despawned в этом же tick'е
        let Ok(mut actor) = commands.get_entity(event.actor) else {
            continue;
        };

        match event.intent {
            CommandIntent::AttackTarget { target } => {
                actor.insert(CommandRequest {
                    command: CommandType::AttackTarget,
                    target,
                    status: CommandStatus::Idle,
                });
            }
            CommandIntent::Clear(CommandKind::AttackTarget) => {
                actor.remove::<CommandRequest>();
            }
            CommandIntent::Clear(CommandKind::PatrolResume) => {
                actor.remove::<PatrolResumeData>();
            }
        }
    }
}
