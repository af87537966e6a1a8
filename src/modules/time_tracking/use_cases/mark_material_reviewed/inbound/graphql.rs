use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_tracking::use_cases::mark_material_reviewed::decide::MarkMaterialReviewed;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MarkMaterialReviewedMutation;

#[Object]
impl MarkMaterialReviewedMutation {
    async fn mark_material_reviewed(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .mark_material_reviewed
            .handle(MarkMaterialReviewed { id: Some(id) })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
