pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-md mx-auto border border-gray-100 dark:border-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const LIST_CONTAINER: &str = "relative overflow-y-auto rounded-xl border border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-900";
pub const LIST_ROW: &str = "flex items-center justify-center rounded-lg bg-white dark:bg-gray-800 text-lg font-medium text-gray-900 dark:text-white shadow-sm";
pub const LIST_ROW_WINNER: &str = "flex items-center justify-center rounded-lg bg-gradient-to-r from-yellow-400 to-orange-500 text-lg font-bold text-white shadow-lg";
pub const SPIN_BUTTON: &str = "w-full mt-6 px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full mt-6 px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
pub const RESULT_BANNER: &str = "mt-6 px-6 py-4 rounded-xl bg-gradient-to-r from-orange-400 to-orange-600 border-2 border-orange-300 text-white font-bold text-xl text-center animate-bounce";
pub const RESULT_PENDING: &str = "mt-6 px-6 py-4 rounded-xl bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-300 text-center animate-pulse";
