// src/specs/columns.rs
//
// The output table schema. Order matters: other tooling reads by position.

use super::delivery::{DeliveryRecord, Point3};

pub const COLUMN_COUNT: usize = 55;

pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "country", "format", "batting_team", "bowling_team", "home_for_bat", "home_for_bowl",
    "batter", "bat_id", "bat_hand", "nonstriker", "nonstriker_hand", "bowler", "bowler_id",
    "innings", "ball_id", "over_num", "ball_num", "ball_type",
    "runs", "boundary", "extras", "extras_type",
    "is_wicket", "wicket_type", "wickets_taken",
    "shot_attack", "shot_played", "shot_type_additional",
    "bounce_angle", "bounce_x", "bounce_y", "bounce_z",
    "cof", "cor", "crease_x", "crease_y", "crease_z",
    "deviation", "drop_angle", "hit_stumps",
    "impact_x", "impact_y", "impact_z",
    "react_time_to_crease", "react_time_to_intercept", "pbr", "release_speed",
    "release_x", "release_y", "release_z",
    "initial_angle", "swing",
    "stump_x", "stump_y", "stump_z",
];


/// Position of a column by name.
pub fn index_of(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| *c == name)
}

fn push_point(row: &mut Vec<String>, p: &Point3) {
    row.push(p.x.to_string());
    row.push(p.y.to_string());
    row.push(p.z.to_string());
}

impl DeliveryRecord {
    /// One table row, in `COLUMNS` order.
    pub fn to_row(&self) -> Vec<String> {
        let t = &self.teams;
        let pl = &self.players;
        let n = &self.number;
        let sc = &self.score;
        let sh = &self.shot;
        let tr = &self.trajectory;

        let mut row = Vec::with_capacity(COLUMN_COUNT);
        row.extend([
            t.country.to_string(),
            t.format.to_string(),
            t.batting_team.to_string(),
            t.bowling_team.to_string(),
            t.home_for_bat.to_string(),
            t.home_for_bowl.to_string(),
            pl.batter.to_string(),
            pl.bat_id.to_string(),
            s!(pl.bat_hand.code()),
            pl.nonstriker.to_string(),
            s!(pl.nonstriker_hand.code()),
            pl.bowler.to_string(),
            pl.bowler_id.to_string(),
            n.innings.to_string(),
            n.ball_id(),
            n.over.to_string(),
            n.ball.to_string(),
            self.ball_type.to_string(),
            sc.runs.to_string(),
            sc.boundary.to_string(),
            sc.extras.to_string(),
            sc.extras_type.to_string(),
            sc.is_wicket.to_string(),
            sc.wicket_type.to_string(),
            sc.wickets_taken.to_string(),
            sh.attacked.to_string(),
            sh.played.to_string(),
            sh.type_additional.to_string(),
            tr.bounce_angle.to_string(),
        ]);
        push_point(&mut row, &tr.bounce);
        row.push(tr.cof.to_string());
        row.push(tr.cor.to_string());
        push_point(&mut row, &tr.crease);
        row.extend([
            tr.deviation.to_string(),
            tr.drop_angle.to_string(),
            tr.hit_stumps.to_string(),
        ]);
        push_point(&mut row, &tr.impact);
        row.extend([
            tr.react_time_to_crease.to_string(),
            tr.react_time_to_intercept.to_string(),
            tr.pbr.to_string(),
            tr.release_speed.to_string(),
        ]);
        push_point(&mut row, &tr.release);
        row.push(tr.initial_angle.to_string());
        row.push(tr.swing.to_string());
        push_point(&mut row, &tr.stump);

        debug_assert_eq!(row.len(), COLUMN_COUNT);
        row
    }
}
