//! Static table of NBA franchises used to walk team rosters.

use crate::cli::types::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub abbreviation: &'static str,
    pub full_name: &'static str,
}

const fn team(id: i64, abbreviation: &'static str, full_name: &'static str) -> Team {
    Team {
        id: TeamId(id),
        abbreviation,
        full_name,
    }
}

pub const NBA_TEAMS: [Team; 30] = [
    team(1610612737, "ATL", "Atlanta Hawks"),
    team(1610612738, "BOS", "Boston Celtics"),
    team(1610612739, "CLE", "Cleveland Cavaliers"),
    team(1610612740, "NOP", "New Orleans Pelicans"),
    team(1610612741, "CHI", "Chicago Bulls"),
    team(1610612742, "DAL", "Dallas Mavericks"),
    team(1610612743, "DEN", "Denver Nuggets"),
    team(1610612744, "GSW", "Golden State Warriors"),
    team(1610612745, "HOU", "Houston Rockets"),
    team(1610612746, "LAC", "LA Clippers"),
    team(1610612747, "LAL", "Los Angeles Lakers"),
    team(1610612748, "MIA", "Miami Heat"),
    team(1610612749, "MIL", "Milwaukee Bucks"),
    team(1610612750, "MIN", "Minnesota Timberwolves"),
    team(1610612751, "BKN", "Brooklyn Nets"),
    team(1610612752, "NYK", "New York Knicks"),
    team(1610612753, "ORL", "Orlando Magic"),
    team(1610612754, "IND", "Indiana Pacers"),
    team(1610612755, "PHI", "Philadelphia 76ers"),
    team(1610612756, "PHX", "Phoenix Suns"),
    team(1610612757, "POR", "Portland Trail Blazers"),
    team(1610612758, "SAC", "Sacramento Kings"),
    team(1610612759, "SAS", "San Antonio Spurs"),
    team(1610612760, "OKC", "Oklahoma City Thunder"),
    team(1610612761, "TOR", "Toronto Raptors"),
    team(1610612762, "UTA", "Utah Jazz"),
    team(1610612763, "MEM", "Memphis Grizzlies"),
    team(1610612764, "WAS", "Washington Wizards"),
    team(1610612765, "DET", "Detroit Pistons"),
    team(1610612766, "CHA", "Charlotte Hornets"),
];

pub fn find_by_abbreviation(abbreviation: &str) -> Option<&'static Team> {
    NBA_TEAMS
        .iter()
        .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_team_table_is_complete_and_unique() {
        let ids: HashSet<i64> = NBA_TEAMS.iter().map(|t| t.id.as_i64()).collect();
        let abbreviations: HashSet<&str> = NBA_TEAMS.iter().map(|t| t.abbreviation).collect();
        assert_eq!(ids.len(), 30);
        assert_eq!(abbreviations.len(), 30);
        assert!(ids.iter().all(|id| (1610612737..=1610612766).contains(id)));
    }

    #[test]
    fn test_find_by_abbreviation() {
        let lakers = find_by_abbreviation("lal").unwrap();
        assert_eq!(lakers.id, TeamId::new(1610612747));
        assert_eq!(lakers.full_name, "Los Angeles Lakers");
        assert!(find_by_abbreviation("XYZ").is_none());
    }
}
