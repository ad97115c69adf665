//! Static pool of short identifier words.
//!
//! Five- and six-letter English nouns used as synthetic column names.
//! Kept short so stimuli stay visually uniform across trials.

pub(crate) static WORDS: &[&str] = &[
    "world", "house", "place", "group", "party", "money", "point", "state", "night", "water",
    "thing", "order", "power", "court", "level", "child", "south", "staff", "woman", "north",
    "sense", "death", "range", "table", "trade", "study", "other", "price", "class", "union",
    "value", "paper", "right", "voice", "stage", "light", "march", "board", "month", "music",
    "field", "award", "issue", "basis", "front", "heart", "force", "model", "space", "hotel",
    "floor", "style", "event", "press", "doubt", "blood", "sound", "title", "glass", "earth",
    "river", "whole", "piece", "mouth", "radio", "peace", "start", "share", "truth", "stone",
    "queen", "stock", "horse", "plant", "visit", "scale", "image", "trust", "chair", "cause",
    "speed", "crime", "pound", "match", "scene", "stuff", "claim", "video", "trial", "phone",
    "train", "sight", "grant", "shape", "offer", "smile", "track", "route", "touch", "youth",
    "waste", "crown", "birth", "faith", "entry", "total", "major", "owner", "lunch", "cross",
    "judge", "guide", "cover", "green", "brain", "phase", "coast", "drink", "drive", "metal",
    "index", "adult", "sport", "noise", "agent", "motor", "sheet", "crowd", "shock", "fruit",
    "steel", "plate", "grass", "dress", "theme", "white", "focus", "chief", "sleep", "beach",
    "sugar", "panel", "dream", "bread", "chest", "block", "store", "break", "drama", "skill",
    "round", "scope", "plane", "uncle", "limit", "taste", "fault", "tower", "input", "enemy",
    "anger", "cycle", "pilot", "frame", "novel", "reply", "prize", "nurse", "cream", "depth",
    "sheep", "dance", "coach", "ratio", "fight", "unity", "steam", "final", "clock", "pride",
    "buyer", "smoke", "score", "watch", "apple", "trend", "proof", "pitch", "shirt", "knife",
    "draft", "shift", "squad", "layer", "curve", "wheel", "topic", "guard", "angle", "smell",
    "grace", "flesh", "pupil", "guest", "delay", "mayor", "logic", "album", "habit", "audit",
    "baker", "paint", "storm", "worth", "black", "canal", "robin", "leave", "lease", "young",
    "print", "fleet", "crash", "asset", "cloud", "villa", "actor", "ocean", "brand", "craft",
    "alarm", "bench", "diary", "abbey", "grade", "shell", "cloth", "piano", "clerk", "stake",
    "stand", "mouse", "cable", "manor", "local", "penny", "shame", "check", "forum", "brick",
    "fraud", "stick", "grain", "movie", "cheek", "reign", "label", "theft", "lover", "shore",
    "guilt", "devil", "fence", "glory", "panic", "juice", "debut", "laugh", "chaos", "strip",
    "derby", "chart", "widow", "essay", "fibre", "patch", "fluid", "virus", "pause", "angel",
    "cliff", "brass", "magic", "honey", "rover", "bacon", "trick", "bonus", "straw", "shelf",
    "sauce", "grief", "verse", "shade", "heath", "sword", "waist", "slope", "organ", "skirt",
    "ghost", "serum", "lorry", "brush", "spell", "lodge", "ozone", "nerve", "rally", "eagle",
    "suite", "ridge", "reach", "human", "breed", "photo", "lemon", "charm", "elite", "basin",
    "venue", "flood", "swing", "punch", "grave", "saint", "corps", "bunch", "usage", "trail",
    "width", "yield", "ferry", "close", "array", "crack", "clash", "alpha", "truck", "trace",
    "salad", "medal", "cabin", "plain", "bride", "stamp", "tutor", "mount", "thumb", "mercy",
    "fever", "laser", "realm", "blade", "boost", "flour", "arrow", "pulse", "elbow", "graph",
    "flame", "skull", "sweat", "arena", "marsh", "maker", "wrist", "frost", "choir", "rider",
    "wheat", "rival", "exile", "flora", "spine", "lobby", "irony", "ankle", "giant", "mason",
    "dairy", "merit", "chase", "ideal", "agony", "gloom", "toast", "linen", "probe", "scent",
    "canon", "slide", "metre", "beard", "chalk", "blast", "tiger", "vicar", "ruler", "motif",
    "beast", "worry", "ivory", "split", "slave", "hedge", "lotus", "shaft", "cargo", "prose",
    "altar", "small", "flash", "piper", "quest", "quota", "catch", "torch", "slice", "feast",
    "siege", "queue", "blame", "towel", "rebel", "decay", "stool", "hurry", "onset", "libel",
    "belly", "grasp", "twist", "basil", "maxim", "trunk", "mould", "baron", "fairy", "batch",
    "colon", "spray", "guild", "coral", "thigh", "valve", "disco", "drift", "hazel", "drill",
    "thief", "tweed", "snake", "tribe", "trout", "spoon", "stall", "daily", "surge", "grove",
    "treat", "knock", "pearl", "nylon", "purse", "depot", "delta", "gauge", "rifle", "onion",
    "salon", "radar", "chill", "globe", "crust", "guess", "cloak", "orbit", "blaze", "midst",
    "haven", "tooth", "climb", "flock", "brook", "wrong", "short", "daisy", "chess", "burst",
    "course", "system", "school", "family", "market", "police", "policy", "office", "person",
    "health", "mother", "period", "father", "centre", "effect", "action", "moment", "report",
    "church", "change", "street", "result", "reason", "nature", "member", "figure", "friend",
    "amount", "series", "future", "labour", "letter", "theory", "growth", "chance", "record",
    "energy", "income", "scheme", "design", "choice", "couple", "county", "summer", "colour",
    "season", "garden", "charge", "advice", "doctor", "extent", "window", "access", "region",
    "degree", "return", "public", "answer", "leader", "appeal", "method", "source", "demand",
    "sector", "status", "safety", "weight", "league", "budget", "review", "minute", "survey",
    "speech", "effort", "career", "attack", "length", "memory", "impact", "forest", "sister",
    "winter", "corner", "damage", "credit", "debate", "supply", "museum", "animal", "island",
    "relief", "target", "spirit", "coffee", "factor", "battle", "prison", "bridge", "detail",
    "client", "search", "master", "dinner", "agency", "manner", "favour", "crisis", "prince",
    "danger", "output", "middle", "player", "threat", "notice", "bottom", "profit", "second",
    "castle", "option", "reform", "spring", "estate", "volume", "branch", "object", "driver",
    "belief", "murder", "flight", "treaty", "desire", "palace", "engine", "breath", "screen",
    "silver", "injury", "valley", "bishop", "motion", "author", "nation", "sample", "aspect",
    "beauty", "square", "vision", "reader", "behalf", "deputy", "artist", "expert", "parish",
    "strike", "border", "bottle", "autumn", "victim", "editor", "stress", "wealth", "parent",
    "decade", "height", "writer", "clause", "worker", "empire", "notion", "mirror", "travel",
    "regime", "circle", "pocket", "module", "affair", "winner", "breach", "finger", "throat",
    "phrase", "holder", "defeat", "origin", "shadow", "device", "tennis", "jacket", "column",
    "guitar", "signal", "poetry", "camera", "string", "tenant", "burden", "cattle", "studio",
    "cheese", "summit", "carbon", "stream", "medium", "cotton", "heaven", "farmer", "tongue",
    "petrol", "walker", "timber", "tunnel", "lesson", "carpet", "humour", "lawyer", "miller",
    "strain", "honour", "turkey", "flower", "glance", "ticket", "secret", "fabric", "format",
    "female", "chapel", "butter", "talent", "prayer", "export", "tissue", "temple", "dollar",
    "priest", "horror", "equity", "garage", "salary", "warmth", "gender", "cheque", "weapon",
    "seller", "cinema", "oxygen", "launch", "escape", "resort", "virtue", "wonder", "fellow",
    "desert", "planet", "copper", "symbol", "excess", "dealer", "muscle", "singer", "stance",
    "cousin", "spread", "regard", "infant", "domain", "switch", "rescue", "whisky", "excuse",
    "reward", "breast", "pardon", "arrest", "button", "avenue", "finish", "wisdom", "virgin",
    "toilet", "bronze", "repair", "filter", "rhythm", "vendor", "margin", "custom", "shower",
    "matrix", "clinic", "bureau", "terror", "salmon", "comedy", "vessel", "merger", "supper",
    "killer", "coffin", "lounge", "keeper", "clergy", "server", "accent", "collar", "butler",
    "soccer", "breeze", "remedy", "trophy", "senate", "hunter", "marble", "diesel", "stroke",
    "orange", "ladder", "powder", "basket", "thesis", "layout", "ballet", "misery", "script",
    "needle", "legend", "sphere", "liquid", "gravel", "throne", "remark", "fusion", "entity",
    "handle", "intake", "praise", "manual", "intent", "inside", "packet", "temper", "porter",
    "pencil", "colony", "critic", "victor", "canvas", "hunger", "racism", "jersey", "knight",
    "gospel", "legacy", "genius", "double", "census", "parade", "accord", "hatred", "shield",
    "motive", "outset", "recipe", "plasma", "bucket", "hammer", "quarry", "ballot", "morale",
    "pepper", "patent", "import", "tumour", "fringe", "chorus", "jungle", "asylum", "vacuum",
    "sleeve", "unrest", "refuge", "ritual", "sodium", "fridge", "burial", "fossil", "debtor",
    "strand", "drawer", "armour", "statue", "common", "warren", "dragon", "cherry", "velvet",
    "potato", "luxury", "thrust", "barrel", "brandy", "kettle", "fisher", "gossip", "outfit",
    "combat", "advent", "decree", "poison", "thread", "garlic", "hazard", "candle", "sewage",
    "foster", "cruise", "little", "patron", "hamlet", "corpse", "jockey", "debris", "patrol",
    "insect", "enzyme", "mosaic", "denial", "poster", "tomato", "purity", "corpus", "revolt",
    "circus", "header", "stitch", "nephew", "plight", "parcel", "guinea", "waiter", "warden",
    "demise", "boiler", "bullet", "single", "oracle", "runner", "voyage", "gentry", "tariff",
    "litter", "saddle", "vector", "marker", "helmet", "excise", "spider", "meadow", "pillow",
    "bowler", "tenure", "famine", "bundle", "radius", "rumour", "asthma", "cellar", "ribbon",
    "defect", "melody", "regret", "cannon", "spouse", "climax", "campus", "recall", "herald",
    "rocket", "galaxy", "picnic", "torque", "hockey", "granny", "socket", "sierra", "bomber",
    "cement", "potter", "kidney", "sketch", "ordeal", "barley", "coupon", "syntax", "divide",
    "dancer", "outlet", "regent", "sherry", "pistol", "wallet", "trader", "banker", "stereo",
    "violin", "tackle", "fender", "wicket", "convoy", "escort", "mantle", "monkey", "bypass",
    "buffet", "banner", "update", "sunset", "sorrow", "mister", "legion", "hurdle", "saloon",
    "squash", "trench", "vigour", "hostel", "mortar", "rubber", "dismay", "heater", "cooker",
    "banana", "trauma", "mutant", "jumper", "winger", "jargon", "shrine", "outing", "donkey",
    "center", "puzzle", "midday", "runway", "jaguar", "pledge", "scream", "plague", "embryo",
    "rector", "canopy", "anchor", "pastry", "bubble", "savage", "upside", "groove", "menace",
    "insult", "vapour", "barrow", "ascent", "serial", "blouse", "repeat", "rental", "cereal",
    "stride", "slogan", "suburb", "replay", "sultan", "pillar", "viewer", "grange", "viking",
    "roller", "marina", "sailor", "plaque", "homage", "advert", "glider", "novice", "gamble",
    "liquor", "priory", "barber", "goblin", "sponge", "tactic", "polish", "barker", "cuckoo",
    "bidder", "exodus", "cavity", "streak", "thrill", "weaver", "unease", "lender", "clutch",
    "storey", "pigeon", "scorer", "fright", "bonnet", "influx", "hollow", "freeze", "yellow",
];
