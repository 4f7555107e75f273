use async_graphql::MergedObject;

use crate::gql::domains::catalog::CatalogMutation;
use crate::gql::domains::fixtures::FixtureMutation;
use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::standings::StandingsMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CatalogMutation, FixtureMutation, MatchMutation, StandingsMutation);
