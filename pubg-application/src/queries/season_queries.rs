use pubg_domain::{decode_many, ApiRequest, Season};

use crate::fetch::{fetch_body, track_list};
use crate::{AppError, AppState};

pub async fn list_seasons(state: &AppState) -> Result<Vec<Season>, AppError> {
    let request = ApiRequest::Seasons { shard: state.shard };
    let body = fetch_body(state, &request).await?;
    track_list(state, "season list", decode_many::<Season>(&body))
}

pub fn current_season(seasons: &[Season]) -> Option<&Season> {
    seasons.iter().find(|season| season.is_current_season)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{state, FakeApi};
    use pubg_domain::Shard;

    #[tokio::test]
    async fn finds_current_season() {
        let api = FakeApi::default().with(
            ApiRequest::Seasons { shard: Shard::Steam },
            r#"{"data": [
                {"type": "season", "id": "s-1", "attributes": {"isCurrentSeason": false, "isOffseason": false}},
                {"type": "season", "id": "s-2", "attributes": {"isCurrentSeason": true, "isOffseason": false}}
            ]}"#,
        );
        let seasons = list_seasons(&state(api)).await.expect("seasons");
        assert_eq!(seasons.len(), 2);
        assert_eq!(current_season(&seasons).map(|season| season.id.as_str()), Some("s-2"));
        assert!(current_season(&seasons[..1]).is_none());
    }

    #[tokio::test]
    async fn malformed_seasons_are_skipped_and_counted() {
        let api = FakeApi::default().with(
            ApiRequest::Seasons { shard: Shard::Steam },
            r#"{"data": [
                {"type": "season", "id": "s-1", "attributes": {"isCurrentSeason": true}},
                "s-2",
                {"type": "player", "id": "account.1"}
            ]}"#,
        );
        let app = state(api);
        let seasons = list_seasons(&app).await.expect("seasons");
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].id, "s-1");

        let summary = app.metrics.render_summary();
        assert!(summary.contains("documents decoded: 1\n"));
        assert!(summary.contains("skipped resources: 2\n"));
    }
}
