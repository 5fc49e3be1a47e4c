//! Built-in English verb base forms.

/// Verb base forms a suffix rule may reduce a word to.
///
/// A candidate lemma outside this list is rejected and the word is kept as
/// written, so `movies` stays `movies` instead of becoming `movy`. Bases of
/// the irregular-verb table are listed too.
#[rustfmt::skip]
pub const ENGLISH_VERBS: &[&str] = &[
    "accept", "act", "add", "admire", "advise", "advocate", "afford", "agree", "aim", "allow",
    "amaze", "analyze", "answer", "appear", "apply", "appreciate", "argue", "arrange", "arrive", "ask",
    "attach", "attend", "avoid", "bake", "balance", "be", "bear", "beat", "become", "beg",
    "begin", "believe", "belong", "bike", "blend", "bless", "blog", "boil", "book", "borrow",
    "bounce", "box", "break", "breathe", "bring", "broadcast", "brush", "build", "burn", "buy",
    "buzz", "call", "camp", "care", "carry", "catch", "cause", "celebrate", "challenge", "change",
    "chase", "chat", "cheat", "check", "cheer", "chill", "choose", "clean", "climb", "close",
    "coach", "code", "collaborate", "collect", "come", "comment", "compete", "complete", "compose", "connect",
    "consider", "consult", "contain", "continue", "contribute", "control", "cook", "copy", "count", "cover",
    "craft", "crash", "create", "cross", "cry", "curate", "cure", "cut", "cycle", "dance",
    "date", "deal", "decide", "defeat", "defend", "deliver", "depend", "deploy", "design", "develop",
    "die", "dig", "direct", "discover", "discuss", "dive", "do", "dog", "donate", "doodle",
    "drag", "draw", "dream", "dress", "drink", "drive", "drop", "earn", "eat", "edit",
    "educate", "empower", "encourage", "end", "engage", "engineer", "enjoy", "enter", "escape", "explain",
    "explore", "express", "face", "fail", "fall", "fear", "feed", "feel", "fight", "figure",
    "fill", "film", "find", "finish", "fish", "fit", "fix", "fly", "focus", "fold",
    "follow", "forget", "forgive", "found", "free", "fry", "gain", "garden", "gather", "get",
    "give", "go", "grab", "graduate", "greet", "grind", "grow", "guess", "guide", "hack",
    "handle", "hang", "happen", "hate", "have", "heal", "hear", "heat", "help", "hide",
    "hike", "hire", "hit", "hold", "hop", "hope", "host", "hug", "hunt", "hurry",
    "hurt", "identify", "imagine", "improve", "include", "increase", "influence", "inform", "innovate", "inspire",
    "install", "intend", "interview", "introduce", "invent", "invest", "invite", "join", "joke", "judge",
    "jump", "keep", "kick", "kill", "kiss", "knit", "know", "land", "laugh", "launch",
    "lead", "learn", "leave", "lend", "let", "lie", "lift", "like", "link", "listen",
    "live", "lose", "love", "maintain", "make", "manage", "mark", "market", "marry", "match",
    "matter", "mean", "measure", "meet", "mention", "mentor", "mind", "miss", "mix", "model",
    "motivate", "need", "note", "notice", "nurse", "obey", "offer", "open", "order", "organize",
    "own", "paint", "park", "pass", "pay", "perform", "photograph", "pick", "place", "plan",
    "plant", "play", "point", "post", "pour", "practice", "pray", "prefer", "prepare", "present",
    "print", "produce", "program", "promise", "promote", "protect", "prove", "provide", "publish", "pull",
    "push", "race", "raise", "reach", "read", "realize", "receive", "record", "recover", "reduce",
    "relax", "release", "remember", "repeat", "reply", "report", "research", "rest", "return", "review",
    "ride", "ring", "rise", "rock", "roll", "run", "rush", "sail", "save", "say",
    "scan", "score", "seat", "see", "seek", "sell", "send", "serve", "set", "sew",
    "shake", "shape", "share", "shine", "ship", "shoot", "shop", "shout", "sing", "sit",
    "skate", "sketch", "ski", "sleep", "smile", "solve", "speak", "speed", "spend", "split",
    "sponsor", "stand", "start", "stay", "stop", "stream", "study", "succeed", "suggest", "support",
    "surf", "surprise", "sweat", "swim", "take", "talk", "taste", "teach", "tell", "test",
    "thank", "think", "throw", "tie", "train", "translate", "travel", "treat", "try", "tweet",
    "type", "understand", "unite", "update", "use", "visit", "volunteer", "vote", "wait", "wake",
    "walk", "wander", "want", "watch", "wear", "win", "wish", "wonder", "work", "worry",
    "worship", "write",
];
