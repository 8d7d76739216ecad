//! Action registry
//!
//! Static, per-family catalogs of installer actions plus the role
//! default lists. Debian and Ubuntu share the apt catalog; Arch uses the
//! pacman catalog. The two catalogs bind the same action ids to
//! different commands, so the rest of the flow is family-agnostic.
//!
//! Catalogs are authored here and never mutated at runtime. A role
//! default list naming an id missing from a catalog is a catalog
//! authoring error and panics at lookup; the exhaustive test below keeps
//! that from ever shipping.

use brokkr_core::types::{Distro, Role};

use crate::action::Action;

/// Which package ecosystem a registry's commands target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFamily {
    /// Debian and Ubuntu (apt, snap)
    Apt,
    /// Arch Linux (pacman, AUR)
    Pacman,
}

impl std::fmt::Display for PackageFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apt => write!(f, "apt"),
            Self::Pacman => write!(f, "pacman"),
        }
    }
}

/// An immutable action registry for one package family
#[derive(Debug)]
pub struct Registry {
    family: PackageFamily,
    actions: &'static [Action],
}

impl Registry {
    /// The registry active for a distribution
    pub fn for_distro(distro: Distro) -> &'static Registry {
        match distro {
            Distro::Debian | Distro::Ubuntu => &APT_REGISTRY,
            Distro::Arch => &PACMAN_REGISTRY,
        }
    }

    pub fn family(&self) -> PackageFamily {
        self.family
    }

    /// Every action in this registry, in catalog order
    pub fn actions(&self) -> &'static [Action] {
        self.actions
    }

    /// Look up an action by id
    pub fn resolve(&self, id: &str) -> Option<&'static Action> {
        self.actions.iter().find(|action| action.id == id)
    }

    /// The fixed default action list for a role, in catalog-authored order
    pub fn defaults_for(&self, role: Role) -> Vec<&'static Action> {
        default_ids(role)
            .iter()
            .map(|id| {
                self.resolve(id)
                    .unwrap_or_else(|| panic!("catalog authoring error: role default '{id}' is not in the {} catalog", self.family))
            })
            .collect()
    }

    /// Menu of actions still selectable after the role defaults
    ///
    /// Defaults already scheduled never reappear here; the subtraction
    /// happens at menu-build time, in catalog order.
    pub fn additional_menu(&self, role: Role) -> Vec<&'static Action> {
        let defaults = default_ids(role);
        self.actions
            .iter()
            .filter(|action| !defaults.contains(&action.id))
            .collect()
    }
}

/// Role default ids, shared across families
fn default_ids(role: Role) -> &'static [&'static str] {
    match role {
        Role::Developer => &["docker", "dbeaver", "openvpn3", "sublime-text"],
        Role::Tester => &["docker", "postman", "dbeaver"],
        Role::Database => &["dbeaver", "postgresql-client"],
        Role::Other => &[],
    }
}

pub static APT_REGISTRY: Registry = Registry {
    family: PackageFamily::Apt,
    actions: APT_ACTIONS,
};

pub static PACMAN_REGISTRY: Registry = Registry {
    family: PackageFamily::Pacman,
    actions: PACMAN_ACTIONS,
};

static APT_ACTIONS: &[Action] = &[
    Action {
        id: "docker",
        name: "Docker",
        description: "Container runtime and CLI",
        command: "curl -fsSL https://get.docker.com | sh && sudo usermod -aG docker $USER",
        notes: Some("Group membership takes effect at next login"),
    },
    Action {
        id: "dbeaver",
        name: "DBeaver",
        description: "Universal database client",
        command: "sudo snap install dbeaver-ce",
        notes: None,
    },
    Action {
        id: "openvpn3",
        name: "OpenVPN 3",
        description: "VPN client for the office network",
        command: "sudo mkdir -p /etc/apt/keyrings && curl -fsSL https://packages.openvpn.net/packages-repo.gpg | sudo tee /etc/apt/keyrings/openvpn.asc >/dev/null && echo \"deb [signed-by=/etc/apt/keyrings/openvpn.asc] https://packages.openvpn.net/openvpn3/debian $(lsb_release -cs) main\" | sudo tee /etc/apt/sources.list.d/openvpn3.list && sudo apt-get update && sudo apt-get install -y openvpn3",
        notes: None,
    },
    Action {
        id: "sublime-text",
        name: "Sublime Text",
        description: "Text editor",
        command: "wget -qO - https://download.sublimetext.com/sublimehq-pub.gpg | gpg --dearmor | sudo tee /etc/apt/trusted.gpg.d/sublimehq-archive.gpg >/dev/null && echo 'deb https://download.sublimetext.com/ apt/stable/' | sudo tee /etc/apt/sources.list.d/sublime-text.list && sudo apt-get update && sudo apt-get install -y sublime-text",
        notes: None,
    },
    Action {
        id: "vscode",
        name: "Visual Studio Code",
        description: "Code editor",
        command: "sudo snap install code --classic",
        notes: None,
    },
    Action {
        id: "postman",
        name: "Postman",
        description: "API testing client",
        command: "sudo snap install postman",
        notes: None,
    },
    Action {
        id: "slack",
        name: "Slack",
        description: "Team chat",
        command: "sudo snap install slack",
        notes: None,
    },
    Action {
        id: "nodejs",
        name: "Node.js",
        description: "JavaScript runtime (LTS)",
        command: "curl -fsSL https://deb.nodesource.com/setup_22.x | sudo -E bash - && sudo apt-get install -y nodejs",
        notes: None,
    },
    Action {
        id: "golang",
        name: "Go",
        description: "Go toolchain",
        command: "sudo snap install go --classic",
        notes: None,
    },
    Action {
        id: "postgresql-client",
        name: "PostgreSQL client",
        description: "psql and friends",
        command: "sudo apt-get update && sudo apt-get install -y postgresql-client",
        notes: None,
    },
    Action {
        id: "google-chrome",
        name: "Google Chrome",
        description: "Browser",
        command: "wget -q https://dl.google.com/linux/direct/google-chrome-stable_current_amd64.deb -O /tmp/google-chrome.deb && sudo apt-get install -y /tmp/google-chrome.deb",
        notes: None,
    },
];

static PACMAN_ACTIONS: &[Action] = &[
    Action {
        id: "docker",
        name: "Docker",
        description: "Container runtime and CLI",
        command: "sudo pacman -S --noconfirm docker docker-compose && sudo systemctl enable --now docker && sudo usermod -aG docker $USER",
        notes: Some("Group membership takes effect at next login"),
    },
    Action {
        id: "dbeaver",
        name: "DBeaver",
        description: "Universal database client",
        command: "sudo pacman -S --noconfirm dbeaver",
        notes: None,
    },
    Action {
        id: "openvpn3",
        name: "OpenVPN 3",
        description: "VPN client for the office network",
        command: "yay -S --noconfirm openvpn3",
        notes: Some("Requires an AUR helper (yay)"),
    },
    Action {
        id: "sublime-text",
        name: "Sublime Text",
        description: "Text editor",
        command: "curl -O https://download.sublimetext.com/sublimehq-pub.gpg && sudo pacman-key --add sublimehq-pub.gpg && sudo pacman-key --lsign-key 8A8F901A && rm sublimehq-pub.gpg && echo -e '\\n[sublime-text]\\nServer = https://download.sublimetext.com/arch/stable/x86_64' | sudo tee -a /etc/pacman.conf && sudo pacman -Syu --noconfirm sublime-text",
        notes: None,
    },
    Action {
        id: "vscode",
        name: "Visual Studio Code",
        description: "Code editor",
        command: "yay -S --noconfirm visual-studio-code-bin",
        notes: Some("Requires an AUR helper (yay)"),
    },
    Action {
        id: "postman",
        name: "Postman",
        description: "API testing client",
        command: "yay -S --noconfirm postman-bin",
        notes: Some("Requires an AUR helper (yay)"),
    },
    Action {
        id: "slack",
        name: "Slack",
        description: "Team chat",
        command: "yay -S --noconfirm slack-desktop",
        notes: Some("Requires an AUR helper (yay)"),
    },
    Action {
        id: "nodejs",
        name: "Node.js",
        description: "JavaScript runtime (LTS)",
        command: "sudo pacman -S --noconfirm nodejs npm",
        notes: None,
    },
    Action {
        id: "golang",
        name: "Go",
        description: "Go toolchain",
        command: "sudo pacman -S --noconfirm go",
        notes: None,
    },
    Action {
        id: "postgresql-client",
        name: "PostgreSQL client",
        description: "psql and friends",
        command: "sudo pacman -S --noconfirm postgresql",
        notes: None,
    },
    Action {
        id: "google-chrome",
        name: "Google Chrome",
        description: "Browser",
        command: "yay -S --noconfirm google-chrome",
        notes: Some("Requires an AUR helper (yay)"),
    },
];
