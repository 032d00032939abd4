use std::collections::HashSet;

use league_logic::{
    classify_role, compute_standings, draw_teams, generate_group_stage, generate_round_robin,
    DrawConfig, GroupFormat, Legs, Match, Player, RoleBucket, Team, TeamId,
};
use proptest::prelude::*;

const LABELS: &[&str] = &["Goleiro", "Zagueiro", "Lateral", "Volante", "Meia", "Atacante", "Ponta", ""];

fn player_pool() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((0..LABELS.len(), 1u8..=5), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (label, skill))| {
                Player::new(i as u64 + 1, format!("P{}", i + 1))
                    .with_role(LABELS[label])
                    .with_skill(skill)
            })
            .collect()
    })
}

fn team_ids(n: usize) -> Vec<TeamId> {
    (1..=n).map(|i| format!("t{}", i)).collect()
}

proptest! {
    /// Every player lands on exactly one team and sizes differ by at most one
    #[test]
    fn prop_draw_size_invariant(players in player_pool(), size in 1usize..8) {
        let teams = draw_teams(&players, &DrawConfig::with_team_size(size)).unwrap();

        let total: usize = teams.iter().map(|t| t.roster.len()).sum();
        prop_assert_eq!(total, players.len());

        if let (Some(max), Some(min)) = (
            teams.iter().map(|t| t.roster.len()).max(),
            teams.iter().map(|t| t.roster.len()).min(),
        ) {
            prop_assert!(max - min <= 1);
        }

        let ids: HashSet<u64> = teams.iter().flat_map(|t| t.roster.iter().map(|p| p.id)).collect();
        prop_assert_eq!(ids.len(), players.len());
    }

    /// Same pool, same teams
    #[test]
    fn prop_draw_deterministic(players in player_pool()) {
        let config = DrawConfig::default();
        prop_assert_eq!(draw_teams(&players, &config).unwrap(), draw_teams(&players, &config).unwrap());
    }

    /// Goalkeepers are spread before anyone else when there are enough teams
    #[test]
    fn prop_goalkeepers_spread(players in player_pool()) {
        let teams = draw_teams(&players, &DrawConfig::default()).unwrap();
        let keepers = players
            .iter()
            .filter(|p| classify_role(p.role_label.as_deref()) == RoleBucket::Goalkeeper)
            .count();
        if keepers <= teams.len() {
            for team in &teams {
                let on_team = team
                    .roster
                    .iter()
                    .filter(|p| classify_role(p.role_label.as_deref()) == RoleBucket::Goalkeeper)
                    .count();
                prop_assert!(on_team <= 1);
            }
        }
    }

    /// With a keeper for every team, each roster opens with a keeper
    #[test]
    fn prop_goalkeepers_dealt_first(
        teams in 2usize..5,
        extra_keepers in 0usize..3,
        outfield in prop::collection::vec((1..LABELS.len(), 1u8..=5), 0..30),
        keeper_skills in prop::collection::vec(1u8..=5, 7),
    ) {
        let keepers = teams + extra_keepers;
        let mut players: Vec<Player> = keeper_skills[..keepers]
            .iter()
            .enumerate()
            .map(|(i, &skill)| {
                Player::new(i as u64 + 1, format!("GK{}", i + 1))
                    .with_role("Goleiro")
                    .with_skill(skill)
            })
            .collect();
        // outfield players ahead of the keepers in the pool
        players.splice(
            0..0,
            outfield.iter().enumerate().map(|(i, &(label, skill))| {
                Player::new(100 + i as u64, format!("P{}", i + 1))
                    .with_role(LABELS[label])
                    .with_skill(skill)
            }),
        );

        let size = (players.len() / teams).max(1);
        let drawn = draw_teams(&players, &DrawConfig::with_team_size(size)).unwrap();
        prop_assume!(drawn.len() <= keepers);

        for team in &drawn {
            let first = &team.roster[0];
            prop_assert_eq!(classify_role(first.role_label.as_deref()), RoleBucket::Goalkeeper);
        }
    }

    /// Every unordered pair meets exactly once per leg
    #[test]
    fn prop_round_robin_complete(n in 2usize..14) {
        let ids = team_ids(n);
        let rounds = generate_round_robin(&ids, Legs::Single).unwrap();
        let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
        prop_assert_eq!(rounds.len(), expected_rounds);

        let mut seen = HashSet::new();
        for round in &rounds {
            prop_assert_eq!(round.fixtures.len(), n / 2);
            let mut busy = HashSet::new();
            for f in &round.fixtures {
                prop_assert!(busy.insert(f.team_a.clone()));
                prop_assert!(busy.insert(f.team_b.clone()));
                let key = if f.team_a < f.team_b {
                    (f.team_a.clone(), f.team_b.clone())
                } else {
                    (f.team_b.clone(), f.team_a.clone())
                };
                prop_assert!(seen.insert(key));
            }
        }
        prop_assert_eq!(seen.len(), n * (n - 1) / 2);
    }

    /// Groups never exceed the configured size or round cap
    #[test]
    fn prop_group_stage_caps(n in 0usize..30, cap in 1u32..5) {
        let format = GroupFormat { max_rounds_per_group: cap, ..GroupFormat::standard() };
        let groups = generate_group_stage(&team_ids(n), &format).unwrap();

        let covered: usize = groups.iter().map(|g| g.teams.len()).sum();
        prop_assert_eq!(covered, n);
        for g in &groups {
            prop_assert!(g.rounds.len() <= cap as usize);
            if n >= format.whole_pool_below {
                prop_assert!(g.teams.len() <= format.group_size);
            }
        }
    }

    /// Table is ordered by points, goal difference, goals scored
    #[test]
    fn prop_standings_sorted(scores in prop::collection::vec((0u32..6, 0u32..6), 0..15)) {
        let ids = team_ids(4);
        let teams: Vec<Team> = ids.iter().map(|id| Team::new(id.clone(), id.clone())).collect();
        let fixtures = generate_round_robin(&ids, Legs::Double).unwrap();
        let matches: Vec<Match> = fixtures
            .iter()
            .flat_map(|r| r.to_matches())
            .zip(scores.iter())
            .map(|(m, (a, b))| m.complete(*a, *b, chrono::Utc::now()).unwrap())
            .collect();

        let rows = compute_standings(&teams, &matches).unwrap();
        prop_assert_eq!(rows.len(), 4);

        let played: u32 = rows.iter().map(|r| r.played).sum();
        prop_assert_eq!(played as usize, matches.len() * 2);

        for pair in rows.windows(2) {
            let key = |r: &league_logic::StandingsRow| (r.points, r.goal_diff, r.goals_for);
            prop_assert!(key(&pair[0]) >= key(&pair[1]));
        }
    }
}
