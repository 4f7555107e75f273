use async_graphql::MergedObject;

use crate::gql::domains::auth::AuthQuery;
use crate::gql::domains::catalog::CatalogQuery;
use crate::gql::domains::fixtures::FixtureQuery;
use crate::gql::domains::matches::MatchQuery;
use crate::gql::domains::standings::StandingsQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthQuery, CatalogQuery, FixtureQuery, MatchQuery, StandingsQuery);
