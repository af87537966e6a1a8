use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_tracking::use_cases::delete_time_entry::decide::DeleteTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_time_entry
            .handle(DeleteTimeEntry { id: Some(id) })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
