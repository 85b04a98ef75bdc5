//! What the assistant says.

use gamehub_common::GameId;

pub const WELCOME: &[&str] = &[
    "HEYYYY THERE! Welcome to Game Hub!",
    "*waves excitedly* SO GLAD YOU'RE HERE!",
    "Hi hi hi! I'm SillyTilter! Nice to meet you!",
    "*tilts head and waves* Let's play some GAMES!",
];

pub const IDLE: &[&str] = &[
    "Heyooo! Welcome to the Game Hub!",
    "Ooh, pick me! I mean... pick a game!",
    "I'm kinda tilted about these games... they're AWESOME!",
    "Psst! Both games are super duper fun!",
    "My head goes wobbly when I'm excited!",
    "Did someone say GAMES?! *tilts enthusiastically*",
];

pub const TILT_MASTER: &[&str] = &[
    "WOOO! Tilt Master is AMAZING! *tilts wildly*",
    "I'm tilting SO MUCH right now! Can you feel it?!",
    "This is MY game! Watch me go! *wobbles intensely*",
    "TILT TILT TILT! I can't stop! This is too fun!",
    "Look at me go! I'm the KING of tilting!",
    "My neck is having the TIME OF ITS LIFE!",
];

const HOVER_TRAFFIC: &[&str] = &[
    "Ooh! Traffic game! Watch out for those cars!",
    "This one's great for your posture... unlike my tilted head!",
    "Beep beep! Car sounds! Vrooom!",
];

const HOVER_TILT: &[&str] = &[
    "Head tilt challenge? I'm an EXPERT at that!",
    "This game speaks my language... literally!",
    "Tilt your head like me! It's super fun!",
];

const HOVER_OTHER: &[&str] = &[
    "Ooh, that one looks fun!",
    "Go on, click it! You know you want to!",
];

const LOADING_TRAFFIC: &[&str] = &[
    "Buckle up! Game is loading!",
    "Vroom vroom! Starting engines!",
    "Get ready to dodge traffic!",
];

const LOADING_TILT: &[&str] = &[
    "Tilting... tilting... GAME TIME!",
    "Let's get this head party started!",
    "Wobble wobble! Here we gooo!",
];

const LOADING_OTHER: &[&str] = &[
    "Loading... loading... almost there!",
    "Here it comes! Get ready!",
];

pub fn hover(game: GameId) -> &'static [&'static str] {
    match game.0 {
        0 => HOVER_TRAFFIC,
        1 => HOVER_TILT,
        _ => HOVER_OTHER,
    }
}

pub fn loading(game: GameId) -> &'static [&'static str] {
    match game.0 {
        0 => LOADING_TRAFFIC,
        1 => LOADING_TILT,
        _ => LOADING_OTHER,
    }
}
