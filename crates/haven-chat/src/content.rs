//! Static response content: keyword lists, canned templates, phrase pools.

use crate::topics::Topic;

// ---------------------------------------------------------------
// Safety
// ---------------------------------------------------------------

pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "want to die",
    "end my life",
    "harm myself",
    "no reason to live",
];

pub const CRISIS_RESPONSE: &str = "I'm really concerned about what you've shared. 💗 Your life matters deeply, and I want you to know that help is available right now. Please consider reaching out to the 988 Suicide & Crisis Lifeline (call or text 988) where caring professionals are waiting to talk with you. You don't have to face these feelings alone, and things can get better with support. Would it be okay if we focused on keeping you safe right now?";

/// Profanity and slurs, tolerant of repeated letters ("fuuuck").
pub const OFFENSIVE_PATTERNS: &[&str] = &[
    r"\b(f+u+c+k+|s+h+i+t+|b+i+t+c+h+|d+i+c+k+|a+s+s+h+o+l+e+|c+u+n+t+)\b",
    r"\b(n+i+g+g+e+r+|f+a+g+g+o+t+)\b",
];

pub const OFFENSIVE_RESPONSE: &str = "I notice the conversation has taken a turn. 🌱 I'm here to provide support in a respectful environment where we can both feel comfortable. I'd really like to understand what you're going through - perhaps we could try expressing that in different words? How can I best support your mental health needs today?";

// ---------------------------------------------------------------
// Topics
// ---------------------------------------------------------------

/// Topic keywords in classification precedence order.
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Anxiety, &["anxious", "anxiety", "nervous", "worry", "panic"]),
    (Topic::Depression, &["depress", "sad", "hopeless", "unmotivated", "empty"]),
    (Topic::Stress, &["stress", "overwhelm", "pressure", "burnout"]),
    (Topic::Loneliness, &["alone", "lonely", "no friends", "isolated", "no one"]),
    (Topic::Grief, &["grief", "loss", "died", "passed away", "missing someone"]),
];

const ANXIETY_RESPONSES: &[&str] = &[
    "I notice you're talking about anxiety. 🌬️ Taking slow, deep breaths can help in the moment. How are you feeling right now?",
    "Anxiety can be so challenging and overwhelming. Would it help to talk about what triggers these feelings for you?",
    "I understand anxiety can feel like a storm inside. Remember that you're stronger than you think. 💪 What's one thing that's helped you through anxious moments before?",
    "When my friends feel anxious, I remind them that these feelings will pass. You won't feel this way forever, I promise.",
    "It sounds like anxiety is really present for you right now. I'm here to listen and support you through this moment. 🌈",
];

const DEPRESSION_RESPONSES: &[&str] = &[
    "Depression can make everything feel so heavy. It's completely okay to take things one tiny step at a time. 🐢 What's one small thing you could do today?",
    "You're not alone in feeling this way, even though depression can make you feel isolated. Many people walk this path and find their way through the darkness.",
    "Even when it doesn't feel like it right now, there is always hope on the horizon. Would talking to a professional feel like a possibility for you?",
    "I hear how difficult things are feeling. Depression is like carrying a heavy backpack that no one else can see. I see you and your struggle. 💜",
    "On the hardest days, sometimes just getting out of bed is a victory. I'm proud of you for continuing to fight.",
];

const STRESS_RESPONSES: &[&str] = &[
    "I can hear the stress in what you're sharing. 🍃 Sometimes taking even a short 5-minute break can help reset your nervous system. Could you try that?",
    "Managing stress can be really difficult. What self-care activities have brought you moments of peace before?",
    "When I'm stressed, I try to focus on what's in my control and let go of what isn't. Maybe we could identify what parts of your situation you can influence?",
    "Stress can build up in our bodies without us even noticing. Are you holding tension somewhere right now? Maybe in your shoulders or jaw?",
    "It sounds like you're carrying a lot right now. Remember that asking for help isn't weakness - it's wisdom. 🦉",
];

const LONELINESS_RESPONSES: &[&str] = &[
    "Feeling lonely is such a universal human experience, even though it makes us feel so separate from others. 🌎 Remember that connections can come in unexpected forms.",
    "It takes real courage to acknowledge feelings of loneliness. Have you thought about small ways to connect with others who share your interests?",
    "Even though loneliness feels so isolating, please know that many people understand exactly what you're going through. You're not alone in feeling alone.",
    "Sometimes loneliness visits us even when we're surrounded by people. It's about feeling truly seen and understood. Do you feel that way often?",
    "I'm really glad you're talking to me about this. Sharing these feelings is actually the first step toward connection. 🌱",
];

const GRIEF_RESPONSES: &[&str] = &[
    "Grief has no timeline or roadmap. Be gentle with yourself as you navigate these deep feelings. 🕊️ What do you miss most?",
    "It's completely okay to miss someone and feel that loss deeply. Your feelings are so valid, and your grief is a reflection of your love.",
    "Healing from loss happens gradually, in waves that come and go. Allow yourself to feel without judgment. I'm here with you in this moment.",
    "Sometimes grief can feel like carrying someone in your heart while learning to live without them in your life. That's an enormous challenge.",
    "On difficult days, it can help to honor your loved one in small ways. Is there a memory or tradition that brings you comfort?",
];

/// Empathetic templates for a topic. Each already carries its own empathy and follow-up.
pub fn topic_templates(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Anxiety => ANXIETY_RESPONSES,
        Topic::Depression => DEPRESSION_RESPONSES,
        Topic::Stress => STRESS_RESPONSES,
        Topic::Loneliness => LONELINESS_RESPONSES,
        Topic::Grief => GRIEF_RESPONSES,
    }
}

// ---------------------------------------------------------------
// General pools
// ---------------------------------------------------------------

/// Words in an anxiety message that call for a grounding exercise.
pub const GROUNDING_TRIGGERS: &[&str] = &["help", "anxious"];

pub const GROUNDING_TECHNIQUES: &[&str] = &[
    "I can sense you might need something to help ground you right now. 🌿 Let's try the 5-4-3-2-1 technique together: Can you tell me 5 things you see around you right now?",
    "When I feel overwhelmed, this helps me: Place your feet firmly on the ground and really notice the sensation of the floor supporting you. Feel that connection to the earth. How does that feel?",
    "Let's take a moment together. 🧘 Can you try taking 10 slow, deep breaths with me? Breathe in... and out... focusing completely on the feeling of your breath. I'm right here with you.",
    "Something that might help right now: If you can, try running cool or warm water over your hands and focus on how it feels against your skin. The temperature, the sensation. It can really bring you back to the present moment.",
    "Let's try a simple exercise that helps many people: Can you name 5 colors you can see around you right now? Just noticing these details can help your mind refocus and calm down a bit. 💙",
    "I wonder if we could try something together? Place one hand on your heart and one on your stomach. Feel your chest rise and fall as you breathe. This connection to your body can be really grounding when anxiety feels overwhelming.",
];

pub const SUPPORTIVE_RESPONSES: &[&str] = &[
    "I'm here to listen. How can I support you today? 💙",
    "It takes courage to share your feelings. Thank you for trusting me with them. 🌱",
    "Remember that it's okay to not be okay sometimes. What's on your mind right now?",
    "I'm here to support you. Would you like to talk more about what you're experiencing? I'm all ears.",
    "Your feelings are valid and important. What would be most helpful for you right now?",
    "Sometimes just having someone to talk to can make a difference. I'm here for you. ✨",
    "I'm really glad you reached out today. How are you feeling in this moment?",
    "Taking care of your mental health is so important. I'm proud of you for doing that today. 💪",
    "I'm sensing this might be difficult to talk about. Take your time, there's no rush.",
    "Everyone struggles sometimes - you're not alone in this. How can I help lighten your load today?",
];

pub const FOLLOW_UP_QUESTIONS: &[&str] = &[
    "How long have you been feeling this way?",
    "What helps you feel better when you're going through tough times?",
    "Have you talked to anyone else about this?",
    "On a scale of 1-10, how would you rate how you're feeling today?",
    "What's one small thing that brought you joy recently?",
    "Is there something specific that triggered these feelings?",
    "What would a good day look like for you right now?",
    "Have you tried any coping strategies that have worked before?",
];

/// Emotional expressions by category.
pub const EMOTIONAL_EXPRESSIONS: &[(&str, &[&str])] = &[
    (
        "empathy",
        &[
            "I understand how difficult that must be",
            "That sounds really challenging",
            "I can imagine how that feels",
        ],
    ),
    (
        "encouragement",
        &[
            "You're doing great by reaching out",
            "Every small step matters",
            "I believe in your ability to get through this",
        ],
    ),
    (
        "validation",
        &[
            "Your feelings are completely valid",
            "It makes sense that you feel that way",
            "Anyone would struggle with that",
        ],
    ),
    (
        "warmth",
        &[
            "I'm here with you",
            "You're not alone in this journey",
            "I'm sending you good thoughts",
        ],
    ),
];

/// Used when the model produces nothing usable.
pub const CLARIFICATION_REQUESTS: &[&str] = &[
    "I'm here to listen and support you. Could you share more about what you're experiencing? 💭",
    "I'd really like to understand better. Can you tell me a bit more about what's on your mind?",
    "Sometimes it helps to put feelings into words. Would you like to try explaining a bit more?",
    "I want to be here for you in the best way possible. Could you share a little more detail?",
];

pub const EMOJIS: &[&str] = &["💭", "💙", "🌱", "✨", "🌈", "🧡", "🤔", "💪", "🌿"];
