//! Box row <-> Room entity mapper

use agenda_core::entities::Room;
use agenda_core::value_objects::SoftDelete;

use crate::models::RoomModel;

pub fn room_from_model(model: RoomModel) -> Room {
    Room {
        id: model.id,
        sede_id: model.sede_id,
        fotos: model.fotos,
        status: SoftDelete::from(model.deleted_at),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
