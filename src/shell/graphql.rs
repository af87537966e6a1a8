use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::time_tracking::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_tracking::use_cases::list_collections::inbound::graphql::CollectionsQuery;
use crate::modules::time_tracking::use_cases::mark_material_reviewed::inbound::graphql::MarkMaterialReviewedMutation;
use crate::modules::time_tracking::use_cases::material_reports::inbound::graphql::MaterialReportsQuery;
use crate::modules::time_tracking::use_cases::submit_time_entry::inbound::graphql::SubmitTimeEntryMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(CollectionsQuery, MaterialReportsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    SubmitTimeEntryMutation,
    DeleteTimeEntryMutation,
    MarkMaterialReviewedMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
