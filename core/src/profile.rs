//! Static portfolio copy: hero text, history, skills, and contact channels.
//!
//! Values are embedded in the binary and may be replaced wholesale or per
//! section from a `profile.toml` in the folio home. These are plain data
//! definitions; rendering decisions live in the frontend.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Everything the page displays that is not fetched at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub hero: Hero,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub volunteer: Vec<Volunteer>,
    pub skills: Vec<SkillCategory>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Volunteer {
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Profile {
    /// Load the profile, preferring `profile.toml` under `home`. Sections
    /// missing from the file keep their built-in values; a missing file is
    /// simply the built-in profile.
    pub fn load(home: &Path) -> Result<Self, ProfileError> {
        let path = home.join("profile.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| ProfileError::Io {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ProfileError::Parse {
            path: display,
            source,
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            education: vec![Education {
                degree: "Bachelor of Science: Data Science".to_string(),
                school: "Fast University".to_string(),
                period: "January 2020 - February 2025".to_string(),
            }],
            experience: vec![Experience {
                role: "Internship: AKSA-SDS".to_string(),
                period: "19 March 2025 - 15 July 2025".to_string(),
                summary: "Worked on Node.js, JavaScript, and Express.js, building web APIs for \
                          an IoT-based web project."
                    .to_string(),
            }],
            volunteer: vec![Volunteer {
                role: "Volunteer Teacher: Orphan Home - Islamabad, Pakistan".to_string(),
                summary: "Taught core academic subjects to middle school students and designed \
                          interactive lesson plans for diverse learning styles."
                    .to_string(),
            }],
            skills: vec![
                SkillCategory {
                    name: "Programming Languages".to_string(),
                    items: string_items(&[
                        "Python", "JavaScript", "R", "Golang", "Solidity", "C", "C++",
                    ]),
                },
                SkillCategory {
                    name: "Data Visualization".to_string(),
                    items: string_items(&["Tableau", "matplotlib", "seaborn", "D3.js"]),
                },
                SkillCategory {
                    name: "Machine Learning".to_string(),
                    items: string_items(&["scikit-learn", "TensorFlow"]),
                },
                SkillCategory {
                    name: "DevOps".to_string(),
                    items: string_items(&["Docker", "GitHub", "Apache Airflow", "MLflow"]),
                },
                SkillCategory {
                    name: "Web Development".to_string(),
                    items: string_items(&["Express.js", "Flask", "React"]),
                },
                SkillCategory {
                    name: "Databases".to_string(),
                    items: string_items(&["SQL", "MySQL", "NoSQL", "MongoDB"]),
                },
                SkillCategory {
                    name: "Blockchain & Cryptocurrency".to_string(),
                    items: string_items(&["MetaMask", "Ganache", "Remix", "Web3.js", "Truffle"]),
                },
                SkillCategory {
                    name: "Soft Skills".to_string(),
                    items: string_items(&[
                        "Effective Communication",
                        "Problem-solving",
                        "Adaptability",
                        "Community Engagement",
                    ]),
                },
            ],
            contact: Contact::default(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Salar Ahmed".to_string(),
            headline: "Results-driven Data Scientist with a solid foundation in machine \
                       learning, data visualization, and full-stack development."
                .to_string(),
            summary: "Skilled in deploying data-centric solutions to support strategic \
                      decision-making. Adept at using a diverse tech stack and DevOps tools. \
                      Passionate about continuous learning, research, and delivering impactful \
                      insights."
                .to_string(),
            links: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/salarsalarsalar".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/".to_string(),
                },
            ],
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            blurb: "I'm always open to new opportunities and collaborations. Feel free to \
                    reach out!"
                .to_string(),
            email: "salarahmed9876@gmail.com".to_string(),
            phone: "+92 349 1057973".to_string(),
        }
    }
}

fn string_items(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
