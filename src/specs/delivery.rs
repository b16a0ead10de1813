// src/specs/delivery.rs
//
// One delivery document → one DeliveryRecord.

use serde_json::{Map, Value};

use crate::core::{Picker, Scalar};
use crate::error::ExtractError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Right,
    Left,
}

impl Hand {
    /// Only an explicit `false` makes a left-hander.
    pub fn from_is_right_handed(v: &Scalar) -> Self {
        match v.as_bool() {
            Some(false) => Hand::Left,
            _ => Hand::Right,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Hand::Right => "RHB",
            Hand::Left => "LHB",
        }
    }
}

/// `{over-1}.{ball}`: overs are 1-based upstream, 0-based on scorecards.
pub fn ball_id(over: u32, ball: u32) -> String {
    format!("{}.{}", i64::from(over) - 1, ball)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeliveryNumber {
    pub innings: u32,
    pub over: u32,
    pub ball: u32,
}

impl DeliveryNumber {
    pub fn ball_id(&self) -> String {
        ball_id(self.over, self.ball)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Teams {
    pub country: Scalar,
    pub format: Scalar,
    pub batting_team: Scalar,
    pub bowling_team: Scalar,
    pub home_for_bat: Scalar,
    pub home_for_bowl: Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Players {
    pub batter: Scalar,
    pub bat_id: Scalar,
    pub bat_hand: Hand,
    pub nonstriker: Scalar,
    pub nonstriker_hand: Hand,
    pub bowler: Scalar,
    pub bowler_id: Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    pub runs: Scalar,
    pub boundary: Scalar,
    pub extras: Scalar,
    pub extras_type: Scalar,
    pub is_wicket: Scalar,
    pub wicket_type: Scalar,
    pub wickets_taken: Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shot {
    pub attacked: Scalar,
    pub played: Scalar,
    pub type_additional: Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub bounce_angle: Scalar,
    pub bounce: Point3,
    pub cof: Scalar,
    pub cor: Scalar,
    pub crease: Point3,
    pub deviation: Scalar,
    pub drop_angle: Scalar,
    pub hit_stumps: Scalar,
    pub impact: Point3,
    pub react_time_to_crease: Scalar,
    pub react_time_to_intercept: Scalar,
    pub pbr: Scalar,
    pub release_speed: Scalar,
    pub release: Point3,
    pub initial_angle: Scalar,
    pub swing: Scalar,
    pub stump: Point3,
}

/// Everything the table keeps about one ball.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub teams: Teams,
    pub players: Players,
    pub number: DeliveryNumber,
    pub ball_type: Scalar,
    pub score: Score,
    pub shot: Shot,
    pub trajectory: Trajectory,
}

type Obj = Map<String, Value>;

/// Decode one document. All key paths are visited before deciding, so the
/// error lists every hole in the document, not just the first.
pub fn extract(doc: &Value) -> Result<DeliveryRecord, ExtractError> {
    let mut p = Picker::new();

    let root = match doc {
        Value::Object(m) => Some(m),
        _ => {
            return Err(ExtractError::Incomplete {
                missing: Vec::new(),
                mistyped: vec![s!("$")],
            });
        }
    };

    let m = p.obj(root, "", "match");
    let bat = p.obj(m, "match", "battingTeam");
    let bowl = p.obj(m, "match", "bowlingTeam");
    let batter = p.obj(bat, "match.battingTeam", "batsman");
    let partner = p.obj(bat, "match.battingTeam", "batsmanPartner");
    let bowler = p.obj(bowl, "match.bowlingTeam", "bowler");
    let delivery = p.obj(m, "match", "delivery");

    let teams = Teams {
        country: pick!(p, root, "", "country"),
        format: pick!(p, root, "", "format"),
        batting_team: pick!(p, bat, "match.battingTeam", "name"),
        bowling_team: pick!(p, bowl, "match.bowlingTeam", "name"),
        home_for_bat: pick!(p, bat, "match.battingTeam", "home"),
        home_for_bowl: pick!(p, bowl, "match.bowlingTeam", "home"),
    };

    let players = Players {
        batter: pick!(p, batter, "match.battingTeam.batsman", "name"),
        bat_id: pick!(p, batter, "match.battingTeam.batsman", "id"),
        bat_hand: Hand::from_is_right_handed(
            &pick!(p, batter, "match.battingTeam.batsman", "isRightHanded"),
        ),
        nonstriker: pick!(p, partner, "match.battingTeam.batsmanPartner", "name"),
        nonstriker_hand: Hand::from_is_right_handed(
            &pick!(p, partner, "match.battingTeam.batsmanPartner", "isRightHanded"),
        ),
        bowler: pick!(p, bowler, "match.bowlingTeam.bowler", "name"),
        bowler_id: pick!(p, bowler, "match.bowlingTeam.bowler", "id"),
    };

    let number = {
        let at = "match.delivery.deliveryNumber";
        let n = p.obj(delivery, "match.delivery", "deliveryNumber");
        DeliveryNumber {
            innings: p.count(n, at, "innings"),
            over: p.count(n, at, "over"),
            ball: p.count(n, at, "ball"),
        }
    };

    let ball_type = pick!(p, delivery, "match.delivery", "deliveryType");
    let score = extract_score(&mut p, delivery);
    let shot = {
        let at = "match.delivery.shotInformation";
        let s = p.obj(delivery, "match.delivery", "shotInformation");
        Shot {
            attacked: pick!(p, s, at, "shotAttacked"),
            played: pick!(p, s, at, "shotPlayed"),
            type_additional: pick!(p, s, at, "shotTypeAdditional"),
        }
    };
    let trajectory = extract_trajectory(&mut p, delivery);

    p.finish(DeliveryRecord { teams, players, number, ball_type, score, shot, trajectory })
}

fn extract_score(p: &mut Picker, delivery: Option<&Obj>) -> Score {
    let at = "match.delivery.scoringInformation";
    let s = p.obj(delivery, "match.delivery", "scoringInformation");
    let w = p.obj(s, at, "wicket");
    let wat = "match.delivery.scoringInformation.wicket";
    Score {
        runs: pick!(p, s, at, "score"),
        boundary: pick!(p, s, at, "boundary"),
        extras: pick!(p, s, at, "extrasScore"),
        extras_type: pick!(p, s, at, "extrasType"),
        is_wicket: pick!(p, w, wat, "isWicket"),
        wicket_type: pick!(p, w, wat, "wicketType"),
        wickets_taken: pick!(p, w, wat, "wicketsTaken"),
    }
}

fn point(p: &mut Picker, traj: Option<&Obj>, key: &str) -> Point3 {
    let at = format!("match.delivery.trajectory.{key}");
    let o = p.obj(traj, "match.delivery.trajectory", key);
    Point3 {
        x: p.scalar(o, &at, "x"),
        y: p.scalar(o, &at, "y"),
        z: p.scalar(o, &at, "z"),
    }
}

fn extract_trajectory(p: &mut Picker, delivery: Option<&Obj>) -> Trajectory {
    let at = "match.delivery.trajectory";
    let t = p.obj(delivery, "match.delivery", "trajectory");
    Trajectory {
        bounce_angle: pick!(p, t, at, "bounceAngle"),
        bounce: point(p, t, "bouncePosition"),
        cof: pick!(p, t, at, "cof"),
        cor: pick!(p, t, at, "cor"),
        crease: point(p, t, "creasePosition"),
        deviation: pick!(p, t, at, "deviation"),
        drop_angle: pick!(p, t, at, "dropAngle"),
        hit_stumps: pick!(p, t, at, "hitStumps"),
        impact: point(p, t, "impactPosition"),
        react_time_to_crease: pick!(p, t, at, "reactionTime(to crease)"),
        react_time_to_intercept: pick!(p, t, at, "reactionTime(to interception)"),
        pbr: pick!(p, t, at, "pbr"),
        release_speed: pick!(p, t, at, "releaseSpeed"),
        release: point(p, t, "releasePosition"),
        initial_angle: pick!(p, t, at, "initialAngle"),
        swing: pick!(p, t, at, "swing"),
        stump: point(p, t, "stumpPosition"),
    }
}
