pub trait Language {
    fn welcome(&self) -> &'static str;
    fn choose_lang(&self) -> &'static str;
    fn invalid_choice(&self) -> &'static str;
    fn ask_username(&self) -> &'static str;
    fn help(&self) -> &'static str;
    fn no_files(&self) -> &'static str;
    fn files_header(&self, dir: &str) -> String;
    fn selection_prompt(&self) -> &'static str;
    fn selection_not_a_number(&self) -> &'static str;
    fn selection_out_of_range(&self) -> &'static str;
    fn selected(&self, name: &str) -> String;
    fn opening(&self, name: &str) -> String;
    fn edge_open(&self) -> &'static str;
    fn edge_failed(&self) -> &'static str;
    fn launch_failed(&self) -> &'static str;
    fn lang_changed(&self) -> &'static str;
    fn goodbye(&self) -> &'static str;
    fn unknown(&self) -> &'static str;
    fn use_file_first(&self) -> &'static str;
}

pub struct Danish;
impl Language for Danish {
    fn welcome(&self) -> &'static str { "Velkommen til Lumb!" }
    fn choose_lang(&self) -> &'static str {
        "Vælg sprog / Choose language:\n1) Dansk\n2) English\n3) Français\n4) Deutsch\n5) Español\nSkriv nummeret for sprogvalg:"
    }
    fn invalid_choice(&self) -> &'static str { "Ugyldigt valg. Prøv igen." }
    fn ask_username(&self) -> &'static str { "Skriv dit brugernavn:" }
    fn help(&self) -> &'static str {
        "Kommandoer:\n - file : Vis filer i nuværende mappe (skriv nummer for at markere, dobbeltklik for at åbne)\n - browser : Åbn Microsoft Edge\n - youtube : Åbn YouTube i Edge\n - photo : Åbn pixlr.com i Edge\n - world : Skift sprog\n - hjælp eller help : Vis denne hjælp\n - exit eller quit : Afslut programmet"
    }
    fn no_files(&self) -> &'static str { "Ingen filer i denne mappe." }
    fn files_header(&self, dir: &str) -> String { format!("Filer i mappe '{dir}':") }
    fn selection_prompt(&self) -> &'static str { "(skriv nummer for at markere, 'tilbage' for tilbage) > " }
    fn selection_not_a_number(&self) -> &'static str { "Skriv et nummer eller 'tilbage'." }
    fn selection_out_of_range(&self) -> &'static str { "Ugyldigt nummer." }
    fn selected(&self, name: &str) -> String { format!("Valgt: {name} (tryk samme nummer igen for at åbne)") }
    fn opening(&self, name: &str) -> String { format!("Forsøger at åbne fil: {name}") }
    fn edge_open(&self) -> &'static str { "Forsøger at åbne Microsoft Edge..." }
    fn edge_failed(&self) -> &'static str { "Kunne ikke finde Edge, åbner i standardbrowser." }
    fn launch_failed(&self) -> &'static str { "Kunne ikke åbne noget program." }
    fn lang_changed(&self) -> &'static str { "Sprog ændret." }
    fn goodbye(&self) -> &'static str { "Farvel!" }
    fn unknown(&self) -> &'static str { "Ukendt kommando." }
    fn use_file_first(&self) -> &'static str { "Skriv 'file' for at liste filer, eller brug kommandoerne." }
}

pub struct English;
impl Language for English {
    fn welcome(&self) -> &'static str { "Welcome to Lumb!" }
    fn choose_lang(&self) -> &'static str {
        "Choose language:\n1) Dansk\n2) English\n3) Français\n4) Deutsch\n5) Español\nType the number:"
    }
    fn invalid_choice(&self) -> &'static str { "Invalid choice. Try again." }
    fn ask_username(&self) -> &'static str { "Enter your username:" }
    fn help(&self) -> &'static str {
        "Commands:\n - file : List files in current folder (type number to select, double-click to open)\n - browser : Open Microsoft Edge\n - youtube : Open YouTube in Edge\n - photo : Open pixlr.com in Edge\n - world : Change language\n - help or hjælp : Show this help\n - exit or quit : Quit"
    }
    fn no_files(&self) -> &'static str { "No files in this folder." }
    fn files_header(&self, dir: &str) -> String { format!("Files in folder '{dir}':") }
    fn selection_prompt(&self) -> &'static str { "(type a number to select, 'back' to return) > " }
    fn selection_not_a_number(&self) -> &'static str { "Type a number or 'back'." }
    fn selection_out_of_range(&self) -> &'static str { "Invalid number." }
    fn selected(&self, name: &str) -> String { format!("Selected: {name} (type same number again to open)") }
    fn opening(&self, name: &str) -> String { format!("Attempting to open file: {name}") }
    fn edge_open(&self) -> &'static str { "Attempting to open Microsoft Edge..." }
    fn edge_failed(&self) -> &'static str { "Edge not found, opening in default browser." }
    fn launch_failed(&self) -> &'static str { "Could not open anything." }
    fn lang_changed(&self) -> &'static str { "Language changed." }
    fn goodbye(&self) -> &'static str { "Goodbye!" }
    fn unknown(&self) -> &'static str { "Unknown command." }
    fn use_file_first(&self) -> &'static str { "Type 'file' to list files, or use the commands." }
}

pub struct French;
impl Language for French {
    fn welcome(&self) -> &'static str { "Bienvenue dans Lumb!" }
    fn choose_lang(&self) -> &'static str {
        "Choisissez la langue:\n1) Dansk\n2) English\n3) Français\n4) Deutsch\n5) Español\nTapez le numéro:"
    }
    fn invalid_choice(&self) -> &'static str { "Choix invalide. Réessayez." }
    fn ask_username(&self) -> &'static str { "Entrez votre nom d'utilisateur:" }
    fn help(&self) -> &'static str {
        "Commandes:\n - file : Lister les fichiers (tapez le numéro pour sélectionner, double-cliquez pour ouvrir)\n - browser : Ouvrir Microsoft Edge\n - youtube : Ouvrir YouTube dans Edge\n - photo : Ouvrir pixlr.com dans Edge\n - world : Changer la langue\n - help ou hjælp : Afficher cette aide\n - exit ou quit : Quitter"
    }
    fn no_files(&self) -> &'static str { "Aucun fichier dans ce dossier." }
    fn files_header(&self, dir: &str) -> String { format!("Fichiers dans le dossier '{dir}':") }
    fn selection_prompt(&self) -> &'static str { "(tapez un numéro pour sélectionner, 'retour' pour revenir) > " }
    fn selection_not_a_number(&self) -> &'static str { "Tapez un numéro ou 'retour'." }
    fn selection_out_of_range(&self) -> &'static str { "Numéro invalide." }
    fn selected(&self, name: &str) -> String { format!("Sélectionné: {name} (tapez le même numéro à nouveau pour ouvrir)") }
    fn opening(&self, name: &str) -> String { format!("Tentative d'ouverture du fichier: {name}") }
    fn edge_open(&self) -> &'static str { "Tentative d'ouverture de Microsoft Edge..." }
    fn edge_failed(&self) -> &'static str { "Edge introuvable, ouverture dans le navigateur par défaut." }
    fn launch_failed(&self) -> &'static str { "Impossible d'ouvrir quoi que ce soit." }
    fn lang_changed(&self) -> &'static str { "Langue changée." }
    fn goodbye(&self) -> &'static str { "Au revoir!" }
    fn unknown(&self) -> &'static str { "Commande inconnue." }
    fn use_file_first(&self) -> &'static str { "Tapez 'file' pour lister les fichiers, ou utilisez les commandes." }
}

pub struct German;
impl Language for German {
    fn welcome(&self) -> &'static str { "Willkommen bei lumb!" }
    fn choose_lang(&self) -> &'static str {
        "Sprache wählen:\n1) Dansk\n2) English\n3) Français\n4) Deutsch\n5) Español\nGeben Sie die Nummer ein:"
    }
    fn invalid_choice(&self) -> &'static str { "Ungültige Auswahl. Bitte erneut versuchen." }
    fn ask_username(&self) -> &'static str { "Geben Sie Ihren Benutzernamen ein:" }
    fn help(&self) -> &'static str {
        "Befehle:\n - file : Zeigt Dateien im aktuellen Ordner an (Nummer zum Markieren, Doppel-Klick um zu öffnen)\n - browser : Öffnet Microsoft Edge\n - youtube : Öffnet YouTube in Edge\n - photo : Öffnet pixlr.com in Edge\n - world : Sprache wechseln\n - help oder hjælp : Zeigt diese Hilfe\n - exit oder quit : Beenden"
    }
    fn no_files(&self) -> &'static str { "Keine Dateien in diesem Ordner." }
    fn files_header(&self, dir: &str) -> String { format!("Dateien im Ordner '{dir}':") }
    fn selection_prompt(&self) -> &'static str { "(Nummer zum Markieren, 'zurück' zum Verlassen) > " }
    fn selection_not_a_number(&self) -> &'static str { "Geben Sie eine Nummer oder 'zurück' ein." }
    fn selection_out_of_range(&self) -> &'static str { "Ungültige Nummer." }
    fn selected(&self, name: &str) -> String { format!("Ausgewählt: {name} (geben Sie dieselbe Nummer erneut ein um zu öffnen)") }
    fn opening(&self, name: &str) -> String { format!("Versuche, Datei zu öffnen: {name}") }
    fn edge_open(&self) -> &'static str { "Versuche, Microsoft Edge zu öffnen..." }
    fn edge_failed(&self) -> &'static str { "Edge nicht gefunden, öffne Standardbrowser." }
    fn launch_failed(&self) -> &'static str { "Konnte nichts öffnen." }
    fn lang_changed(&self) -> &'static str { "Sprache geändert." }
    fn goodbye(&self) -> &'static str { "Auf Wiedersehen!" }
    fn unknown(&self) -> &'static str { "Unbekannter Befehl." }
    fn use_file_first(&self) -> &'static str { "Geben Sie 'file' ein, um Dateien aufzulisten, oder nutzen Sie die Befehle." }
}

pub struct Spanish;
impl Language for Spanish {
    fn welcome(&self) -> &'static str { "¡Bienvenido a lumb!" }
    fn choose_lang(&self) -> &'static str {
        "Elige idioma:\n1) Dansk\n2) English\n3) Français\n4) Deutsch\n5) Español\nEscribe el número:"
    }
    fn invalid_choice(&self) -> &'static str { "Opción no válida. Inténtalo de nuevo." }
    fn ask_username(&self) -> &'static str { "Escribe tu nombre de usuario:" }
    fn help(&self) -> &'static str {
        "Comandos:\n - file : Lista archivos en la carpeta actual (escribe número para seleccionar, doble clic para abrir)\n - browser : Abre Microsoft Edge\n - youtube : Abre YouTube en Edge\n - photo : Abre pixlr.com en Edge\n - world : Cambiar idioma\n - help o hjælp : Muestra esta ayuda\n - exit o quit : Salir"
    }
    fn no_files(&self) -> &'static str { "No hay archivos en esta carpeta." }
    fn files_header(&self, dir: &str) -> String { format!("Archivos en la carpeta '{dir}':") }
    fn selection_prompt(&self) -> &'static str { "(escribe un número para seleccionar, 'atrás' para volver) > " }
    fn selection_not_a_number(&self) -> &'static str { "Escribe un número o 'atrás'." }
    fn selection_out_of_range(&self) -> &'static str { "Número no válido." }
    fn selected(&self, name: &str) -> String { format!("Seleccionado: {name} (escribe el mismo número otra vez para abrir)") }
    fn opening(&self, name: &str) -> String { format!("Intentando abrir archivo: {name}") }
    fn edge_open(&self) -> &'static str { "Intentando abrir Microsoft Edge..." }
    fn edge_failed(&self) -> &'static str { "No se encontró Edge, abriendo en el navegador predeterminado." }
    fn launch_failed(&self) -> &'static str { "No se pudo abrir nada." }
    fn lang_changed(&self) -> &'static str { "Idioma cambiado." }
    fn goodbye(&self) -> &'static str { "¡Adiós!" }
    fn unknown(&self) -> &'static str { "Comando desconocido." }
    fn use_file_first(&self) -> &'static str { "Escribe 'file' para listar archivos, o usa los comandos." }
}
