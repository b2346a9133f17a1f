//! Hidden commands. They dispatch and complete like any other command but
//! are left out of `help`.
//!
//! `{owner}` and `{domain}` in the canned text are replaced from the
//! command environment.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::commands::types::{DEFAULT_SITE_DOMAIN, OWNER_NAME_KEY, SITE_DOMAIN_KEY};
use crate::commands::{Command, CommandContext, CommandRegistry, CommandResult};

/// A command that prints fixed text.
pub struct CannedCommand {
    name: &'static str,
    lines: &'static [&'static str],
}

/// A command that prints one randomly chosen message.
pub struct RandomCommand {
    name: &'static str,
    choices: &'static [&'static str],
}

fn fill(text: &str, ctx: &CommandContext) -> String {
    text.replace("{owner}", ctx.env_or(OWNER_NAME_KEY, "the owner"))
        .replace("{domain}", ctx.env_or(SITE_DOMAIN_KEY, DEFAULT_SITE_DOMAIN))
}

#[async_trait]
impl Command for CannedCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn hidden(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::lines(self.lines.iter().map(|line| fill(line, &ctx)))
    }
}

#[async_trait]
impl Command for RandomCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn hidden(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let choice = self.choices.choose(&mut rand::thread_rng()).copied().unwrap_or_default();
        CommandResult::lines(["".to_string(), fill(choice, &ctx)])
    }
}

const CANNED: &[CannedCommand] = &[
    CannedCommand {
        name: "sudo",
        lines: &[
            "",
            "Nice try! But this is a portfolio, not a production server. 😄",
            "Here, have a cookie instead: 🍪",
        ],
    },
    CannedCommand {
        name: "hack",
        lines: &[
            "",
            "Initializing hack sequence...",
            "Bypassing firewall... ░░░░░░░░░░ 0%",
            "Cracking encryption... ████░░░░░░ 40%",
            "Accessing mainframe... ████████░░ 80%",
            "Access granted! ██████████ 100%",
            "",
            "Just kidding! 😂 This isn't Mr. Robot.",
            "But I appreciate your hacker spirit! 💻",
        ],
    },
    CannedCommand {
        name: "matrix",
        lines: &[
            "",
            "Wake up, Neo... 🟢",
            "The portfolio has you...",
            "Follow the white rabbit. 🐰",
            "",
            "Knock, knock.",
        ],
    },
    CannedCommand {
        name: "xyzzy",
        lines: &[
            "",
            "A hollow voice says \"Fool.\"",
            "",
            "(Classic adventure game reference! You know your stuff! 🎮)",
        ],
    },
    CannedCommand {
        name: "vim",
        lines: &[
            "",
            "Entering vim...",
            "",
            "Just kidding! You're still in the terminal. 😅",
            "(To exit vim in real life: ESC, then :q!)",
        ],
    },
    CannedCommand {
        name: "emacs",
        lines: &[
            "",
            "Error: Emacs is a great operating system, lacking only a decent editor.",
            "😏 #TeamVim",
        ],
    },
    CannedCommand {
        name: "sl",
        lines: &[
            "",
            "   (  ) (@@) ( )  (@)  ()    @@    O     @     O     @",
            "  (@@@)",
            "(    )",
            " (@@@@)",
            "(      )",
            "",
            "You meant \"ls\", didn't you? 🚂",
        ],
    },
    CannedCommand {
        name: "potato",
        lines: &[
            "",
            "🥔 This portfolio runs on potato-grade servers.",
            "Just kidding! It's actually pretty fast. 🚀",
        ],
    },
    CannedCommand {
        name: "42",
        lines: &[
            "",
            "The Answer to the Ultimate Question of Life,",
            "the Universe, and Everything is...",
            "",
            "42",
            "",
            "Now you know. But what was the question? 🤔",
        ],
    },
    CannedCommand {
        name: "konami",
        lines: &[
            "",
            "🎮 ↑ ↑ ↓ ↓ ← → ← → B A START",
            "",
            "+30 Lives! Just kidding, this isn't Contra.",
            "But here's a secret: try typing \"secret\"",
        ],
    },
    CannedCommand {
        name: "secret",
        lines: &[
            "",
            "🎉 Congratulations! You found the secret command!",
            "",
            "Here's a fun fact about {owner}:",
            "{owner} believes in clean code, strong coffee, and deploying on Fridays.",
            "(Just kidding about that last one... or am I? 😈)",
            "",
            "Try these other secrets: hack, matrix, joke, coffee, 42",
        ],
    },
    CannedCommand {
        name: "hello",
        lines: &[
            "",
            "Hello, World! 👋",
            "The classic first program. You're keeping it real!",
        ],
    },
    CannedCommand {
        name: "ping",
        lines: &[
            "",
            "PING {domain} (127.0.0.1) 56(84) bytes of data.",
            "64 bytes from localhost: icmp_seq=1 ttl=64 time=0.042 ms",
            "64 bytes from localhost: icmp_seq=2 ttl=64 time=0.037 ms",
            "--- {domain} ping statistics ---",
            "2 packets transmitted, 2 received, 0% packet loss",
            "",
            "Connection is strong! 📡",
        ],
    },
];

const COFFEE: &[&str] = &[
    "☕ Brewing some fresh code... I mean coffee!",
    "☕ Error 418: I'm a teapot, not a coffee maker!",
    "☕ Coffee.exe has stopped working. Please restart developer.",
    "☕ while(!(succeed=try())); // The developer's motto",
];

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode?\nBecause light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb?\nNone. It's a hardware problem. 💡",
    "Why did the developer go broke?\nBecause they used up all their cache! 💰",
    "What's a programmer's favorite hangout?\nThe Foo Bar! 🍺",
    "Why do Java developers wear glasses?\nBecause they don't C#! 👓",
];

pub fn register_easter_eggs(registry: &mut CommandRegistry) {
    for egg in CANNED {
        registry.register(Box::new(CannedCommand { name: egg.name, lines: egg.lines }));
    }
    registry.register(Box::new(RandomCommand { name: "coffee", choices: COFFEE }));
    registry.register(Box::new(RandomCommand { name: "joke", choices: JOKES }));
}
