// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod players;
pub mod round;
pub mod show;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use podshuffle_core::config::PlannerConfig;
    use podshuffle_core::error::Fallible;
    use tempfile::TempDir;
    use tempfile::tempdir;

    use crate::cmd::players::join;
    use crate::cmd::players::record_winner;
    use crate::cmd::players::toggle_drop;
    use crate::cmd::round::next_round;
    use crate::cmd::round::start_game;
    use crate::cmd::show::stored_rounds;
    use crate::state::load_session;

    const ROSTER: &str = "Ann\nBen\nCat\nDan\nEve\nFay\nGus\nHal\nIvy\n";

    fn state_file() -> Fallible<(TempDir, PathBuf)> {
        let dir = tempdir()?;
        let path = dir.path().join("session.json");
        Ok((dir, path))
    }

    #[test]
    fn test_commands_before_start() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let err = next_round(&path, 1).unwrap_err();
        assert!(err.to_string().starts_with("error: no session found at"));
        assert!(stored_rounds(&path, false).is_err());
        Ok(())
    }

    #[test]
    fn test_start_saves_first_round() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let round = start_game(&path, ROSTER, 42, PlannerConfig::default())?;
        assert_eq!(round.number, 1);
        assert_eq!(round.groups.len(), 3);
        assert_eq!(stored_rounds(&path, false)?, vec![round]);
        Ok(())
    }

    #[test]
    fn test_same_seed_same_groups() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let first = start_game(&path, ROSTER, 7, PlannerConfig::default())?;
        let again = start_game(&path, ROSTER, 7, PlannerConfig::default())?;
        assert_eq!(first, again);
        Ok(())
    }

    #[test]
    fn test_start_rejects_tiny_roster() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let err = start_game(&path, "Ann, Ben", 1, PlannerConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: Invalid number of players: 2. At least 3 are needed."
        );
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_full_game() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let first = start_game(&path, ROSTER, 3, PlannerConfig::default())?;
        let winner = first.groups[2][1].clone();
        record_winner(&path, 3, Some(&winner))?;
        let dropped = first.groups[0][0].clone();
        assert!(toggle_drop(&path, &dropped)?);
        assert_eq!(join(&path, "Jon")?, vec!["Jon".to_string()]);

        let second = next_round(&path, 4)?;
        assert_eq!(second.number, 2);
        assert!(second.groups[0].contains(&winner));
        assert!(!second.contains(&dropped));
        assert!(second.contains("Jon"));
        assert_eq!(second.dropped_names, vec![dropped]);

        let rounds = stored_rounds(&path, true)?;
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].winners[2], Some(winner));
        Ok(())
    }

    #[test]
    fn test_failed_command_leaves_file_untouched() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        start_game(&path, ROSTER, 5, PlannerConfig::default())?;
        let before = fs::read_to_string(&path)?;
        assert!(record_winner(&path, 0, None).is_err());
        assert!(record_winner(&path, 9, None).is_err());
        assert!(toggle_drop(&path, "Nobody").is_err());
        assert_eq!(fs::read_to_string(&path)?, before);
        Ok(())
    }

    #[test]
    fn test_config_is_kept_with_session() -> Fallible<()> {
        let (_dir, path) = state_file()?;
        let config = PlannerConfig::from_toml("history_limit = 2\nmax_trials = 20")?;
        start_game(&path, ROSTER, 11, config)?;
        for seed in 0..3 {
            next_round(&path, seed)?;
        }
        let session = load_session(&path)?;
        assert_eq!(session.config(), &config);
        assert_eq!(stored_rounds(&path, true)?.len(), 2);
        Ok(())
    }
}
