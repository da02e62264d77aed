//! Literal page content.
//!
//! Everything the landing page says lives here. Nothing is fetched or computed
//! except the footer year.

/// Site and product name.
pub const SITE_TITLE: &str = "Network Log Analyser";

/// Source repository of the advertised tool.
pub const REPOSITORY_URL: &str = "https://github.com/berserk-23115/LogAnalyser";

/// Hero subtitle.
pub const HERO_SUBTITLE: &str = "Portable Security Monitoring for Isolated Networks";

/// Hero description, also used as the page meta description.
pub const HERO_DESCRIPTION: &str =
    "A CLI-based log analysis tool for monitoring cyber security events on isolated networks";

/// Problem statement background paragraph.
pub const BACKGROUND: &str = "Continuous monitoring of systems and networks is extremely \
    essential to detect, prevent, and respond to cyber security threats. Security Operation \
    Centre (SOC) plays an important role for situational awareness of an organisation, where \
    all logs are monitored continuously. This provides a near real-time perception of threat \
    landscape. However, in case of a scenario where multiple isolated networks are to be \
    monitored, it may be important to undertake this activity in all isolated networks \
    independently. The central monitoring may also be taken up separately, only the logs are \
    collected in the central location on regular intervals.";

/// Detailed description items as `(label, text)`.
pub const DETAILED_DESCRIPTION: [(&str, &str); 4] = [
    (
        "a)",
        "Development of a portable self-oriented, fully functional log analysis tool to \
         monitor cyber security events on isolated networks.",
    ),
    (
        "b)",
        "Configuration capability to prepare a light, informal, and efficient environment \
         tailored to the target IT infrastructure of isolated networks.",
    ),
    (
        "c)",
        "Efficient detection of cyber security attacks based on malicious tactics, techniques, \
         and procedures (TTPs) signature, anomaly, heuristic, behavioral, rule-based analysis, \
         network traffic analysis, and threat intelligence feeds.",
    ),
    (
        "d)",
        "Simple and efficient methodology to update the tool environment and necessary \
         components for keeping it current with evolving threats.",
    ),
];

/// Expected Solution summary. Hidden unless toggled on.
pub const EXPECTED_SOLUTION: &str = "The solution should be a portable, easy-to-use log \
    analysis tool capable of collecting, parsing, and analysing logs from various system and \
    network devices. It should function without dependency on external cloud services, \
    ensuring data privacy and flexibility across different environments on isolated networks \
    as well as central locations.";

/// Expected Solution points as `(label, text)`.
pub const EXPECTED_SOLUTION_POINTS: [(&str, &str); 6] = [
    ("Portability:", "Easily deployable across Windows, Linux, and Mac"),
    ("Multi-source Collection:", "Support for Syslog, FTP, USB protocols"),
    ("Log Parsing:", "Handle multiple formats and normalization"),
    ("Analysis:", "Search, filter, and highlight key events"),
    ("Interface:", "Simple CLI for technical users"),
    ("Offline:", "No internet dependency required"),
];

/// Feature names, in display order.
pub const FEATURES: [&str; 8] = [
    "CLI-Based Interface",
    "Offline Security",
    "Multi-Platform Support",
    "Advanced Detection",
    "Real-Time Monitoring",
    "Log Normalization",
    "TTP Detection",
    "Easy Updates",
];

/// Team members, in display order.
pub const TEAM: [&str; 5] = [
    "Anushk Kumar",
    "Abhas Gupta",
    "Arhan Jain",
    "Akshat Singh",
    "Ayush Kitnawat",
];

/// Embedded demo video.
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Origin of [`DEMO_VIDEO_URL`], granted in the CSP when the demo is shown.
pub const DEMO_VIDEO_ORIGIN: &str = "https://www.youtube.com";

/// Illustrative invocations of the advertised CLI. Rendered verbatim.
pub const USAGE_EXAMPLE: &str = "# Basic Usage
$ ./loganalyser --help

# Analyze log file
$ ./loganalyser -f /path/to/logfile.log

# Real-time monitoring
$ ./loganalyser --live --source /var/log/

# Analyze with specific rules
$ ./loganalyser -f logfile.log -r rules/ttp_rules.txt";

/// Copyright holder shown in the footer.
pub const COPYRIGHT_HOLDER: &str = "Network Log Analyser Project";
