pub const PAGE: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300";
pub const HEADER: &str = "fixed top-0 right-0 p-4 flex gap-2 z-20";
pub const MAIN: &str = "flex min-h-screen items-center justify-center p-8 pt-20";
pub const CONTENT: &str = "max-w-4xl w-full space-y-12";
pub const BUTTON_ICON: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium h-10 px-4 border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-blue-500";
pub const BUTTON_PRIMARY: &str = "w-full inline-flex items-center justify-center px-4 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "w-full inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-60 disabled:cursor-not-allowed transition-colors duration-200";
pub const BUTTON_GHOST: &str = "w-full inline-flex items-center justify-center px-4 py-1.5 rounded-lg text-sm text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors duration-200";
pub const INPUT: &str = "w-full px-4 py-3 rounded-lg border-0 bg-white dark:bg-gray-800 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-600 transition-colors";
pub const INPUT_ERROR: &str = "w-full px-4 py-3 rounded-lg border-0 bg-white dark:bg-gray-800 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:outline-none focus:ring-2 focus:ring-red-500 transition-colors";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const LINK: &str = "underline hover:text-gray-900 dark:hover:text-white transition-colors duration-200";

// Hero section
pub const HERO: &str = "text-center space-y-4";
pub const HERO_TITLE: &str = "text-4xl md:text-5xl font-bold";
pub const HERO_SUBTITLE: &str = "text-lg md:text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto";
pub const EMAIL_BLOCK: &str = "max-w-md mx-auto space-y-2";

// Wheel
pub const WHEEL_COLUMN: &str = "flex flex-col items-center gap-8 w-full";
pub const WHEEL_FRAME: &str = "relative w-full max-w-[546px] aspect-square flex items-center justify-center";
pub const WHEEL_POINTER: &str = "absolute -top-8 left-1/2 -translate-x-1/2 z-20 drop-shadow-2xl";
pub const WHEEL_SVG: &str = "drop-shadow-2xl max-w-[546px] max-h-[546px]";
pub const SPIN_BUTTON: &str = "px-8 py-4 bg-gradient-to-r from-yellow-400 to-yellow-500 hover:from-yellow-500 hover:to-yellow-600 text-white rounded-full font-bold text-lg shadow-xl hover:shadow-2xl transition-all transform hover:scale-105 active:scale-95";
pub const SPIN_BUTTON_DISABLED: &str = "px-8 py-4 bg-gradient-to-r from-gray-400 to-gray-500 text-white rounded-full font-bold text-lg shadow-xl opacity-50 cursor-not-allowed";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5";

// Result modal
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/70 backdrop-blur-sm overflow-y-auto";
pub const MODAL_WRAPPER: &str = "flex min-h-full items-center justify-center p-4";
pub const MODAL_PANEL: &str = "relative w-full sm:max-w-md rounded-xl bg-white dark:bg-gray-900 shadow-xl dark:shadow-[0_6px_20px_-6px_rgba(255,255,255,0.04)] border border-gray-200/50 dark:border-gray-700/50 p-6";
pub const MODAL_TITLE: &str = "text-2xl font-bold text-center";
pub const MODAL_TEXT: &str = "text-center text-base pt-2 text-gray-600 dark:text-gray-300";
pub const PRIZE_BADGE: &str = "w-24 h-24 rounded-full flex items-center justify-center shadow-lg";
pub const PROMO_BOX: &str = "bg-gray-100/50 dark:bg-gray-800/50 rounded-lg p-4 border border-gray-200 dark:border-gray-700";
pub const PROMO_CODE: &str = "text-xl font-mono font-bold text-center tracking-wider";

pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-gray-200/50 dark:border-gray-700/50";
pub const FOOTER_LINK: &str = "text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
