// URL builders for the Riot endpoints the client calls.
// The API key is appended by the client, not here.

pub const ACCOUNT_HOST: &str = "americas";

/// Maps a platform region (na1, euw1, ...) to the regional cluster serving Match V5.
pub fn regional_routing(region: &str) -> &'static str {
    match region {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas", // default
    }
}

pub fn account_by_riot_id(game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        ACCOUNT_HOST, game_name, tag_line
    )
}

pub fn summoner_by_puuid(region: &str, puuid: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
        region, puuid
    )
}

pub fn match_ids_by_puuid(
    region: &str,
    puuid: &str,
    start: usize,
    count: usize,
    queue: Option<u16>,
) -> String {
    let mut url = format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
        regional_routing(region),
        puuid,
        start,
        count
    );
    if let Some(queue) = queue {
        url.push_str(&format!("&queue={}", queue));
    }
    url
}

pub fn match_by_id(region: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        regional_routing(region),
        match_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_routing() {
        assert_eq!(regional_routing("euw1"), "europe");
        assert_eq!(regional_routing("kr"), "asia");
        assert_eq!(regional_routing("unknown"), "americas");
    }

    #[test]
    fn test_match_ids_url_with_queue() {
        let url = match_ids_by_puuid("euw1", "p1", 20, 10, Some(420));
        assert_eq!(
            url,
            "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/p1/ids?start=20&count=10&queue=420"
        );
    }

    #[test]
    fn test_match_ids_url_without_queue() {
        let url = match_ids_by_puuid("na1", "p1", 0, 5, None);
        assert!(url.ends_with("ids?start=0&count=5"));
    }
}
