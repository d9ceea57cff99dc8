//! Advisory lists derived from the numeric scores: recommendation verdict,
//! career matches, skill gaps, learning path, and next steps.

use super::results::{Recommendation, WiscarScores};

/// Ranked career list shown to confident respondents.
const CAREER_TRACKS: [&str; 6] = [
    "Affiliate Marketing Specialist",
    "Affiliate Program Manager",
    "Affiliate Strategist",
    "SEO Affiliate Specialist",
    "Content Writer (Affiliate-focused)",
    "High-ticket Affiliate Marketer",
];

/// Verdict thresholds are inclusive: exactly 85 is a Yes, exactly 65 a Maybe.
pub(crate) fn recommendation(confidence: f64) -> Recommendation {
    if confidence >= 85.0 {
        Recommendation::Yes
    } else if confidence >= 65.0 {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

pub(crate) fn career_matches(confidence: f64, wiscar: &WiscarScores) -> Vec<String> {
    let matches: &[&str] = if confidence >= 85.0 {
        &CAREER_TRACKS[..4]
    } else if confidence >= 65.0 {
        &CAREER_TRACKS[..3]
    } else if wiscar.skill >= 70.0 {
        // Low confidence but demonstrated content skill: steer toward the
        // writing-heavy tracks.
        &["Content Writer (Affiliate-focused)", "SEO Affiliate Specialist"]
    } else {
        &["Content Marketing", "Digital Analytics", "Customer Engagement"]
    };
    matches.iter().map(|s| s.to_string()).collect()
}

/// Fixed check order; each gap can appear at most once.
pub(crate) fn skill_gaps(tech_ready: f64, wiscar: &WiscarScores) -> Vec<String> {
    let mut gaps = Vec::new();

    if tech_ready < 70.0 {
        gaps.push("Technical foundations".to_string());
    }
    if wiscar.skill < 70.0 {
        gaps.push("Content creation".to_string());
    }
    if wiscar.cognitive < 70.0 {
        gaps.push("Analytics and optimization".to_string());
    }
    if wiscar.real_world_fit < 70.0 {
        gaps.push("Campaign strategy".to_string());
    }

    gaps
}

pub(crate) fn learning_path(confidence: f64) -> Vec<String> {
    let path: &[&str] = if confidence >= 85.0 {
        &["Advanced Strategies", "Scaling and Automation"]
    } else if confidence >= 65.0 {
        &["Intermediate Skills", "Campaign Optimization"]
    } else {
        &["Beginner Foundations", "Basic Campaign Setup"]
    };
    path.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn next_steps(recommendation: Recommendation, skill_gaps: &[String]) -> Vec<String> {
    let mut steps = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push("Start your first affiliate campaign".to_string());
            steps.push("Join affiliate networks like Amazon Associates".to_string());
            steps.push("Create content in your chosen niche".to_string());
        }
        Recommendation::Maybe => {
            steps.push("Complete foundational training courses".to_string());
            for gap in skill_gaps {
                // Only some gaps map to a concrete tip; the rest add nothing.
                match gap.as_str() {
                    "Technical foundations" => {
                        steps.push("Learn SEO and analytics basics".to_string())
                    }
                    "Content creation" => {
                        steps.push("Practice content writing and video creation".to_string())
                    }
                    _ => {}
                }
            }
        }
        Recommendation::No => {
            steps.push("Explore alternative careers in digital marketing".to_string());
            steps.push("Consider content marketing or social media roles".to_string());
            steps.push("Build foundational digital skills first".to_string());
        }
    }

    steps
}
